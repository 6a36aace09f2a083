//! Connection announcement action.

use crate::data::JoinLedgerRepository;
use crate::error::AppError;
use crate::registry::dispatcher::HandlerContext;
use crate::registry::event::Event;

/// Logs the connected bot identity and the current ledger size.
///
/// Bound `once` in the shipped manifests: reconnects re-deliver `ready`,
/// and one announcement per process is enough.
pub async fn announce_ready(ctx: HandlerContext, event: Event) -> Result<(), AppError> {
    let Event::Ready { bot_name } = event else {
        return Ok(());
    };

    let recorded = JoinLedgerRepository::new(&ctx.db).count().await?;

    tracing::info!(recorded_members = recorded, "{bot_name} is connected to Discord");

    Ok(())
}
