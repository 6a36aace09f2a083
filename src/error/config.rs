//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
///
/// All variants are fatal at startup: the process cannot run without a
/// complete, valid configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value could not be parsed.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}
