//! Discord bot integration.
//!
//! The `Handler` here is a thin gateway adapter: it translates Serenity
//! events into dispatcher payloads and hands them to the registry, which
//! owns routing, cardinality, and failure isolation. The actual behavior
//! lives in `actions`, addressable from handler manifests by name.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability events
//! - `GUILD_MEMBERS` - Member join/leave events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod actions;
pub mod start;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, EventHandler, Guild, GuildId, Member, Ready, User};
use serenity::async_trait;

use crate::registry::dispatcher::{EventDispatcher, HandlerContext};
use crate::registry::event::Event;

/// Gateway adapter feeding Discord events into the dispatcher.
pub struct Handler {
    dispatcher: Arc<EventDispatcher>,
    db: DatabaseConnection,
    welcome_channel_id: Option<u64>,
}

impl Handler {
    pub fn new(
        dispatcher: Arc<EventDispatcher>,
        db: DatabaseConnection,
        welcome_channel_id: Option<u64>,
    ) -> Self {
        Self {
            dispatcher,
            db,
            welcome_channel_id,
        }
    }

    fn context(&self, ctx: &Context) -> HandlerContext {
        HandlerContext {
            db: self.db.clone(),
            http: ctx.http.clone(),
            welcome_channel_id: self.welcome_channel_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ctx.set_activity(Some(ActivityData::watching("the front door")));

        let event = Event::Ready {
            bot_name: ready.user.name.clone(),
        };
        self.dispatcher.dispatch(self.context(&ctx), event).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let event = Event::GuildCreate {
            guild_id: guild.id.get(),
            guild_name: guild.name,
            member_count: guild.member_count,
        };
        self.dispatcher.dispatch(self.context(&ctx), event).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        let event = Event::MemberJoin {
            guild_id: new_member.guild_id.get(),
            user_id: new_member.user.id.get(),
            display_name: new_member.display_name().to_string(),
            avatar_url: new_member.face(),
        };
        self.dispatcher.dispatch(self.context(&ctx), event).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        let display_name = user.global_name.unwrap_or(user.name);
        let event = Event::MemberLeave {
            guild_id: guild_id.get(),
            user_id: user.id.get(),
            display_name,
        };
        self.dispatcher.dispatch(self.context(&ctx), event).await;
    }
}
