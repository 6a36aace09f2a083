//! Bulk handler loading: discover, validate, register.

use std::path::Path;

use crate::config::RunMode;
use crate::registry::catalog;
use crate::registry::dispatcher::{ActionTable, EventDispatcher};
use crate::registry::manifest::HandlerManifest;

/// Loads every handler manifest under `root` into the dispatcher.
///
/// Loading is best-effort: a manifest that fails to read, parse, or
/// validate is logged and skipped without blocking the rest. The returned
/// count is the number of handlers actually registered, i.e. discovered
/// manifests minus rejected shapes minus environment-skipped bindings.
///
/// # Arguments
/// - `dispatcher` - Target dispatcher for accepted bindings
/// - `root` - Root directory of the manifest tree
/// - `mode` - Active run mode (extension family + environment gate)
/// - `actions` - Built-in action table to resolve manifests against
///
/// # Returns
/// - `usize` - Number of successfully registered handlers
pub fn load_handlers(
    dispatcher: &EventDispatcher,
    root: &Path,
    mode: RunMode,
    actions: &ActionTable,
) -> usize {
    let mut registered = 0;

    for path in catalog::discover(root, mode) {
        let manifest = match HandlerManifest::load(&path, mode) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!("rejecting handler manifest: {e}");
                continue;
            }
        };

        let descriptor = match manifest.into_descriptor(&path, actions) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::warn!("rejecting handler manifest: {e}");
                continue;
            }
        };

        tracing::info!(
            handler = %descriptor.name,
            event = %descriptor.event_kind,
            once = descriptor.once,
            source = %path.display(),
            "registering event handler"
        );

        if dispatcher.register(descriptor) {
            registered += 1;
        }
    }

    tracing::info!(registered, "event handler registration complete");

    registered
}
