//! Environment-based application configuration.

use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_HANDLERS_DIR: &str = "handlers";

/// Run mode of the process, derived from the `APP_ENV` environment variable.
///
/// The mode gates production-only handlers and selects which manifest family
/// the catalog reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Reads the run mode from `APP_ENV`. Anything other than `production`
    /// or `prod` (including an unset variable) is treated as development.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(value) if matches!(value.to_ascii_lowercase().as_str(), "production" | "prod") => {
                RunMode::Production
            }
            _ => RunMode::Development,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, RunMode::Development)
    }

    /// Manifest extension family active for this mode.
    ///
    /// Development reads the hand-authored TOML manifests, production reads
    /// the deployed JSON ones. Exactly one family is active at a time; the
    /// catalog never mixes modes within one process.
    pub fn manifest_extension(self) -> &'static str {
        match self {
            RunMode::Development => "toml",
            RunMode::Production => "json",
        }
    }
}

/// Application configuration loaded once at startup.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Root directory of the handler manifest tree.
    pub handlers_dir: PathBuf,
    /// Channel for welcome/farewell announcements. When unset, joins are
    /// still recorded in the ledger but no message is sent.
    pub welcome_channel_id: Option<u64>,

    pub run_mode: RunMode,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Complete configuration
    /// - `Err(AppError)` - A required variable is missing or unparseable
    pub fn from_env() -> Result<Self, AppError> {
        let welcome_channel_id = match std::env::var("WELCOME_CHANNEL_ID") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "WELCOME_CHANNEL_ID".to_string(),
                reason: e.to_string(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            handlers_dir: std::env::var("HANDLERS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HANDLERS_DIR)),
            welcome_channel_id,
            run_mode: RunMode::from_env(),
        })
    }
}
