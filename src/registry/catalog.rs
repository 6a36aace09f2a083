//! Handler manifest discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::RunMode;

/// Recursively discovers handler manifest files under `root`.
///
/// Descends into every subdirectory and selects files whose extension matches
/// the active run mode's manifest family (`toml` in development, `json` in
/// production); files of the other family are ignored so the two modes never
/// mix. Traversal order is deterministic: entries are sorted by file name
/// within each directory, which fixes the registration order observed in
/// startup logs.
///
/// A missing root is non-fatal: it logs a warning and yields an empty
/// sequence, leaving the bot running with no dynamic handlers.
///
/// # Arguments
/// - `root` - Root directory of the manifest tree
/// - `mode` - Run mode selecting the active extension family
///
/// # Returns
/// - `Vec<PathBuf>` - Paths of matching manifest files in traversal order
pub fn discover(root: &Path, mode: RunMode) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::warn!(
            root = %root.display(),
            "handler directory not found, no handlers will be loaded"
        );
        return Vec::new();
    }

    let extension = mode.manifest_extension();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in handler directory: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension) {
            paths.push(entry.into_path());
        }
    }

    paths
}
