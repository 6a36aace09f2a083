//! Error types for the doorkeeper application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Loader
//! and dispatch failures are contained at their own boundaries and never reach
//! this type; ledger errors do propagate, because they indicate a correctness
//! violation rather than an environmental hiccup.

pub mod config;
pub mod ledger;
pub mod manifest;

use thiserror::Error;

use crate::error::{config::ConfigError, ledger::LedgerError};

/// Top-level application error type.
///
/// Aggregates the error types that can escape a component boundary. Most
/// variants use `#[from]` for automatic conversion at `?` sites.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Join ledger error: either a storage failure or a detected
    /// inconsistency between the unique index and the record set.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    #[error(transparent)]
    Discord(#[from] serenity::Error),
}
