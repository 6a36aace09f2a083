//! Event dispatcher with per-handler failure isolation.
//!
//! The dispatcher binds validated handler descriptors to event kinds and
//! routes every incoming notification to all bindings registered for its
//! kind. Each invocation is supervised: an `Err` return or a panic is caught
//! at the dispatch boundary, logged, and swallowed, so one bad handler can
//! never take down event delivery for its siblings or for later
//! notifications.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::config::RunMode;
use crate::error::AppError;
use crate::registry::event::Event;

/// Boxed future returned by a handler invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'static>>;

/// A registered handler callable.
pub type HandlerFn = Arc<dyn Fn(HandlerContext, Event) -> HandlerFuture + Send + Sync>;

/// Built-in actions addressable from handler manifests, keyed by action name.
pub type ActionTable = HashMap<&'static str, HandlerFn>;

/// Shared collaborators handed to every handler invocation.
#[derive(Clone)]
pub struct HandlerContext {
    pub db: DatabaseConnection,
    /// Shared Discord HTTP client for outbound calls.
    pub http: Arc<Http>,
    pub welcome_channel_id: Option<u64>,
}

/// One validated event binding, ready for registration.
///
/// Created from a manifest at startup, registered at most once, never
/// mutated afterwards.
pub struct HandlerDescriptor {
    /// Action name, used in logs to identify the offending handler.
    pub name: String,
    pub event_kind: String,
    /// Fire at most one time for the dispatcher's lifetime.
    pub once: bool,
    /// Only active outside development mode.
    pub prod_only: bool,
    pub handler: HandlerFn,
}

struct Binding {
    name: String,
    once: bool,
    /// Set by the first dispatch that claims a `once` binding.
    fired: AtomicBool,
    handler: HandlerFn,
}

/// Routes events to their registered handler bindings.
pub struct EventDispatcher {
    mode: RunMode,
    bindings: RwLock<HashMap<String, Vec<Arc<Binding>>>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher for the given run mode.
    pub fn new(mode: RunMode) -> Self {
        Self {
            mode,
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler descriptor.
    ///
    /// Registration is gated by environment: a `prod_only` descriptor is
    /// skipped entirely in development mode, not merely suppressed at call
    /// time. Multiple descriptors may bind the same event kind.
    ///
    /// # Arguments
    /// - `descriptor` - Validated handler binding
    ///
    /// # Returns
    /// - `true` - Handler registered
    /// - `false` - Handler skipped by the environment gate
    pub fn register(&self, descriptor: HandlerDescriptor) -> bool {
        if self.mode.is_development() && descriptor.prod_only {
            tracing::info!(
                handler = %descriptor.name,
                event = %descriptor.event_kind,
                "skipping production-only handler in development mode"
            );
            return false;
        }

        let binding = Arc::new(Binding {
            name: descriptor.name,
            once: descriptor.once,
            fired: AtomicBool::new(false),
            handler: descriptor.handler,
        });

        let mut map = self
            .bindings
            .write()
            .expect("dispatcher binding map poisoned");
        map.entry(descriptor.event_kind.clone())
            .or_default()
            .push(binding);

        tracing::debug!(
            event = %descriptor.event_kind,
            once = descriptor.once,
            "registered event handler"
        );

        true
    }

    /// Number of currently registered bindings, for observability.
    pub fn handler_count(&self) -> usize {
        self.bindings
            .read()
            .expect("dispatcher binding map poisoned")
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Routes one event to every binding registered for its kind.
    ///
    /// `once` bindings are claimed atomically and unregistered before their
    /// single invocation, so an arbitrary number of matching notifications
    /// fires them at most one time. Each invocation runs as its own task:
    /// a failed or panicking handler is logged with the event kind and
    /// once-flag and does not affect sibling handlers, other events, or the
    /// gateway connection.
    ///
    /// # Arguments
    /// - `ctx` - Shared collaborators for this delivery
    /// - `event` - The notification to route
    pub async fn dispatch(&self, ctx: HandlerContext, event: Event) {
        let kind = event.kind();

        let bindings = {
            let map = self
                .bindings
                .read()
                .expect("dispatcher binding map poisoned");
            map.get(kind).cloned().unwrap_or_default()
        };

        for binding in bindings {
            if binding.once {
                // Another in-flight dispatch already claimed this binding.
                if binding.fired.swap(true, Ordering::SeqCst) {
                    continue;
                }
                self.unregister(kind, &binding);
            }

            let invocation = (binding.handler)(ctx.clone(), event.clone());

            match tokio::spawn(invocation).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!(
                        event = kind,
                        handler = %binding.name,
                        once = binding.once,
                        "event handler failed: {e}"
                    );
                }
                Err(join_err) => {
                    tracing::error!(
                        event = kind,
                        handler = %binding.name,
                        once = binding.once,
                        "event handler panicked: {join_err}"
                    );
                }
            }
        }
    }

    fn unregister(&self, kind: &str, target: &Arc<Binding>) {
        let mut map = self
            .bindings
            .write()
            .expect("dispatcher binding map poisoned");

        if let Some(list) = map.get_mut(kind) {
            list.retain(|binding| !Arc::ptr_eq(binding, target));
            if list.is_empty() {
                map.remove(kind);
            }
        }
    }
}
