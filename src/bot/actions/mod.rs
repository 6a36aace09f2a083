//! Built-in actions addressable from handler manifests.
//!
//! Each action is a plain async function with the handler signature. The
//! table below is the registration surface: a manifest's `execute` field is
//! resolved against it, so adding an action here is what makes it available
//! to deployments.

pub mod farewell;
pub mod guild;
pub mod ready;
pub mod welcome;

use std::sync::Arc;

use crate::registry::dispatcher::{ActionTable, HandlerFn, HandlerFuture};

/// Builds the table of built-in actions, keyed by manifest action name.
pub fn builtin_actions() -> ActionTable {
    let mut actions = ActionTable::new();

    actions.insert(
        "announce_ready",
        Arc::new(|ctx, event| Box::pin(ready::announce_ready(ctx, event)) as HandlerFuture)
            as HandlerFn,
    );
    actions.insert(
        "log_guild_available",
        Arc::new(|ctx, event| Box::pin(guild::log_guild_available(ctx, event)) as HandlerFuture)
            as HandlerFn,
    );
    actions.insert(
        "welcome_member",
        Arc::new(|ctx, event| Box::pin(welcome::welcome_member(ctx, event)) as HandlerFuture)
            as HandlerFn,
    );
    actions.insert(
        "farewell_member",
        Arc::new(|ctx, event| Box::pin(farewell::farewell_member(ctx, event)) as HandlerFuture)
            as HandlerFn,
    );

    actions
}
