//! Dispatcher-side event model.
//!
//! Gateway notifications are translated into these payloads by the bot
//! adapter before dispatch, so handlers and tests never depend on live
//! Serenity gateway types. Event kinds are plain identifiers: manifests bind
//! by string identity and a binding for a kind nothing ever emits simply
//! never fires.

/// Event kind identifiers as used in handler manifests.
pub mod kind {
    pub const READY: &str = "ready";
    pub const GUILD_CREATE: &str = "guild_create";
    pub const GUILD_MEMBER_ADDITION: &str = "guild_member_addition";
    pub const GUILD_MEMBER_REMOVAL: &str = "guild_member_removal";
}

/// One upstream notification, with the arguments specific to its kind.
#[derive(Debug, Clone)]
pub enum Event {
    /// The bot connected to the gateway.
    Ready { bot_name: String },
    /// A guild became available or the bot joined a new guild.
    GuildCreate {
        guild_id: u64,
        guild_name: String,
        member_count: u64,
    },
    /// A member joined a guild.
    MemberJoin {
        guild_id: u64,
        user_id: u64,
        display_name: String,
        avatar_url: String,
    },
    /// A member left a guild.
    MemberLeave {
        guild_id: u64,
        user_id: u64,
        display_name: String,
    },
}

impl Event {
    /// Identifier used to route this event to its registered bindings.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Ready { .. } => kind::READY,
            Event::GuildCreate { .. } => kind::GUILD_CREATE,
            Event::MemberJoin { .. } => kind::GUILD_MEMBER_ADDITION,
            Event::MemberLeave { .. } => kind::GUILD_MEMBER_REMOVAL,
        }
    }
}
