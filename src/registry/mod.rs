//! Dynamic event-handler registry.
//!
//! Handler bindings live as manifest files on disk rather than hard-wired
//! registrations, so a deployment can enable, disable, or re-scope handlers
//! without a rebuild. At startup the catalog discovers manifests, each one is
//! validated against the built-in action table, and accepted bindings are
//! registered into the dispatcher:
//!
//! 1. **Catalog** (`catalog`) - recursive manifest discovery, filtered by the
//!    run mode's extension family
//! 2. **Manifest** (`manifest`) - deserialization and shape validation,
//!    producing a `HandlerDescriptor`
//! 3. **Dispatcher** (`dispatcher`) - registration gating, once-vs-recurring
//!    semantics, and per-handler failure isolation
//! 4. **Loader** (`loader`) - the bulk-loading phase tying the three together
//!
//! Loading is best-effort throughout: one unreadable or malformed manifest is
//! logged and skipped, never fatal to the rest of the registry.

pub mod catalog;
pub mod dispatcher;
pub mod event;
pub mod loader;
pub mod manifest;

#[cfg(test)]
mod test;
