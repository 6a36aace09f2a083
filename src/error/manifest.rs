//! Handler manifest error types.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a handler manifest is rejected during the bulk-loading phase.
///
/// All variants are non-fatal to the loader as a whole: the offending file
/// is skipped with one warn log and loading continues.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read handler manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file did not deserialize into the expected shape
    /// (missing fields, wrong types, unknown fields).
    #[error("invalid handler manifest {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The manifest declared an empty event kind.
    #[error("handler manifest {} declares an empty event kind", path.display())]
    EmptyEventKind { path: PathBuf },

    /// The manifest named an action that is not in the built-in action table.
    #[error("handler manifest {} names unknown action '{action}'", path.display())]
    UnknownAction { path: PathBuf, action: String },
}
