//! doorkeeper - a Discord guild bot that assigns every first-time member a
//! permanent member number and announces them, driven by a manifest-based
//! event-handler registry.

mod bot;
mod config;
mod data;
mod error;
mod registry;
mod startup;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::registry::dispatcher::EventDispatcher;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let dispatcher = Arc::new(EventDispatcher::new(config.run_mode));
    let actions = bot::actions::builtin_actions();
    let registered = registry::loader::load_handlers(
        &dispatcher,
        &config.handlers_dir,
        config.run_mode,
        &actions,
    );
    tracing::info!(registered, mode = ?config.run_mode, "event handlers loaded");

    let client = bot::start::init_bot(&config, db, dispatcher).await?;

    bot::start::start_bot(client).await
}
