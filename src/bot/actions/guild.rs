//! Guild availability logging action.

use crate::error::AppError;
use crate::registry::dispatcher::HandlerContext;
use crate::registry::event::Event;

/// Logs guild availability with its current member count.
///
/// The gateway-reported member count is informational only; the ledger is
/// the sole authority on member numbering.
pub async fn log_guild_available(_ctx: HandlerContext, event: Event) -> Result<(), AppError> {
    let Event::GuildCreate {
        guild_id,
        guild_name,
        member_count,
    } = event
    else {
        return Ok(());
    };

    tracing::info!(guild_id, member_count, "guild available: {guild_name}");

    Ok(())
}
