//! Member welcome action.
//!
//! Records the join in the ledger first, then announces the member with
//! their permanent number. The ledger-backed number is stable across leave
//! and rejoin, unlike the guild's raw member count.

use serenity::all::{ChannelId, CreateEmbed, CreateMessage};

use crate::data::JoinLedgerRepository;
use crate::error::AppError;
use crate::registry::dispatcher::HandlerContext;
use crate::registry::event::Event;

/// Handles a member join: ledger first, announcement second.
///
/// The join number is claimed before any side effect, so a failed or
/// skipped announcement still leaves the member with a stable ordinal. A
/// ledger error aborts the announcement for this notification; it is
/// surfaced to the dispatch boundary rather than papered over.
pub async fn welcome_member(ctx: HandlerContext, event: Event) -> Result<(), AppError> {
    let Event::MemberJoin {
        guild_id,
        user_id,
        display_name,
        avatar_url,
    } = event
    else {
        return Ok(());
    };

    let repo = JoinLedgerRepository::new(&ctx.db);
    let join_number = repo.record_join(user_id, &display_name).await?;

    tracing::info!(guild_id, user_id, join_number, "recorded member join");

    let Some(channel_id) = ctx.welcome_channel_id else {
        tracing::debug!(guild_id, "no welcome channel configured, skipping announcement");
        return Ok(());
    };

    let channel = ChannelId::new(channel_id);

    // Confirm the channel still exists before posting to it.
    ctx.http.get_channel(channel).await?;

    let embed = CreateEmbed::new()
        .title(format!("Welcome, {display_name}!"))
        .description(format!("You are member #{join_number} of this server."))
        .thumbnail(avatar_url);

    channel
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
