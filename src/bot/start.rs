use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::registry::dispatcher::EventDispatcher;

/// Builds the Discord client with the gateway adapter attached.
///
/// # Arguments
/// - `config` - Application configuration (bot token, welcome channel)
/// - `db` - Database connection shared with the handlers
/// - `dispatcher` - Dispatcher already populated by the loader
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet started
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    dispatcher: Arc<EventDispatcher>,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal for join/leave events to arrive.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(dispatcher, db, config.welcome_channel_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot, blocking until shutdown.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot ran and shut down cleanly
/// - `Err(AppError)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
