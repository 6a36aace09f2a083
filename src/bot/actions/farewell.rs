//! Member farewell action.

use serenity::all::{ChannelId, CreateMessage};

use crate::data::JoinLedgerRepository;
use crate::error::AppError;
use crate::registry::dispatcher::HandlerContext;
use crate::registry::event::Event;

/// Handles a member leaving: posts a farewell carrying their number.
///
/// Uses the pure lookup, never `record_join`: a leave notification must not
/// allocate an ordinal. A member who was never recorded (joined before the
/// bot) is announced without a number.
pub async fn farewell_member(ctx: HandlerContext, event: Event) -> Result<(), AppError> {
    let Event::MemberLeave {
        guild_id,
        user_id,
        display_name,
    } = event
    else {
        return Ok(());
    };

    let repo = JoinLedgerRepository::new(&ctx.db);
    let join_number = repo.lookup_join_number(user_id).await?;

    tracing::info!(guild_id, user_id, ?join_number, "member left");

    let Some(channel_id) = ctx.welcome_channel_id else {
        return Ok(());
    };

    let content = match join_number {
        Some(number) => format!("{display_name} (member #{number}) has left the server."),
        None => format!("{display_name} has left the server."),
    };

    ChannelId::new(channel_id)
        .send_message(&ctx.http, CreateMessage::new().content(content))
        .await?;

    Ok(())
}
