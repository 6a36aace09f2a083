//! Handler manifest loading and shape validation.
//!
//! A manifest is one small file declaring a single event binding: which
//! event kind it listens for, which built-in action runs, and its
//! cardinality and environment gate. Development deployments author them as
//! TOML; production deployments ship the JSON family. Both deserialize into
//! the same shape.

use std::path::Path;

use serde::Deserialize;

use crate::config::RunMode;
use crate::error::manifest::ManifestError;
use crate::registry::dispatcher::{ActionTable, HandlerDescriptor};

/// Declarative handler binding, as authored in a manifest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerManifest {
    /// Event kind identifier the binding listens for.
    pub event: String,
    /// Name of the built-in action to run.
    pub execute: String,
    /// Fire at most one time for the process lifetime.
    #[serde(default)]
    pub once: bool,
    /// Only register when running outside development mode.
    #[serde(default)]
    pub prod_only: bool,
}

impl HandlerManifest {
    /// Reads and deserializes one manifest file.
    ///
    /// The file format follows the run mode's active family; a file of the
    /// wrong family never reaches this function because the catalog already
    /// filtered it out.
    ///
    /// # Arguments
    /// - `path` - Manifest file path
    /// - `mode` - Run mode selecting the deserialization format
    ///
    /// # Returns
    /// - `Ok(HandlerManifest)` - Parsed manifest
    /// - `Err(ManifestError)` - Unreadable file or invalid shape
    pub fn load(path: &Path, mode: RunMode) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match mode {
            RunMode::Development => toml::from_str(&raw).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            RunMode::Production => serde_json::from_str(&raw).map_err(|e| ManifestError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }

    /// Validates the manifest and resolves it into a registrable descriptor.
    ///
    /// The event kind must be non-empty and `execute` must name an action
    /// present in the built-in action table. Event kinds are otherwise
    /// treated as opaque identifiers.
    ///
    /// # Arguments
    /// - `path` - Source path, carried into rejection reasons
    /// - `actions` - Built-in action table to resolve `execute` against
    ///
    /// # Returns
    /// - `Ok(HandlerDescriptor)` - Accepted binding
    /// - `Err(ManifestError)` - Rejected shape with a descriptive reason
    pub fn into_descriptor(
        self,
        path: &Path,
        actions: &ActionTable,
    ) -> Result<HandlerDescriptor, ManifestError> {
        if self.event.trim().is_empty() {
            return Err(ManifestError::EmptyEventKind {
                path: path.to_path_buf(),
            });
        }

        let handler =
            actions
                .get(self.execute.as_str())
                .cloned()
                .ok_or_else(|| ManifestError::UnknownAction {
                    path: path.to_path_buf(),
                    action: self.execute.clone(),
                })?;

        Ok(HandlerDescriptor {
            name: self.execute,
            event_kind: self.event,
            once: self.once,
            prod_only: self.prod_only,
            handler,
        })
    }
}
