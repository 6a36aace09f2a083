use std::sync::Arc;

use sea_orm::Database;
use serenity::http::Http;

use crate::error::AppError;
use crate::registry::dispatcher::{ActionTable, HandlerContext, HandlerFn, HandlerFuture};

mod catalog;

/// Builds a handler context over a throwaway in-memory database.
pub async fn test_handler_context() -> HandlerContext {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    HandlerContext {
        db,
        http: Arc::new(Http::new("test-token")),
        welcome_channel_id: None,
    }
}

/// Action table containing a single no-op action named `noop`.
pub fn noop_actions() -> ActionTable {
    let mut actions = ActionTable::new();
    actions.insert(
        "noop",
        Arc::new(|_ctx, _event| Box::pin(async { Ok::<(), AppError>(()) }) as HandlerFuture)
            as HandlerFn,
    );
    actions
}
