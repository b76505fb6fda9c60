//! The handler-to-route-template cache.
//!
//! # Responsibilities
//! - Hold the current snapshot of handler id → route template
//! - Serve lock-free lookups against that snapshot
//! - Rebuild the snapshot from the provider on demand
//!
//! # Design Decisions
//! - Snapshot is an immutable map behind an atomic pointer swap; readers
//!   see either the old or the new table in full, never a mixture
//! - The provider call and map build happen on the caller's stack with no
//!   lock held; only the final swap is synchronized
//! - No failure path: an empty provider result rebuilds the cache to empty
//!   rather than keeping a stale table

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::cache::provider::RoutesProvider;
use crate::observability::metrics;

/// Thread-safe cache of handler id → route template associations.
///
/// Constructed empty; populated by [`refresh`](Self::refresh), usually
/// lazily via [`lookup_or_refresh`](Self::lookup_or_refresh) on the first
/// miss for a handler. Share between workers with an `Arc`.
pub struct RouteCache {
    provider: Box<dyn RoutesProvider>,
    snapshot: ArcSwap<HashMap<String, String>>,
}

impl RouteCache {
    /// Create an empty cache backed by the given provider.
    pub fn new(provider: impl RoutesProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            snapshot: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Look up the route template for a handler identifier.
    ///
    /// Returns `None` when the handler is not in the current snapshot —
    /// a normal outcome (unregistered handler, or the table has not been
    /// refreshed since the route appeared), not an error. An empty
    /// `handler` is valid input and always misses.
    pub fn lookup(&self, handler: &str) -> Option<String> {
        let path = self.snapshot.load().get(handler).cloned();
        metrics::record_lookup(path.is_some());
        path
    }

    /// Rebuild the snapshot from the provider and swap it in atomically.
    ///
    /// Every lookup that starts after this returns sees the new table.
    /// Lookups in flight during the swap see old or new, consistently.
    /// Providers should not emit duplicate handler ids; if one does, the
    /// last entry wins. Not cheap — the provider rescans the router's
    /// registration table — so callers should not invoke this per request.
    pub fn refresh(&self) {
        let mut table = HashMap::new();
        for entry in self.provider.routes() {
            table.insert(entry.handler, entry.path);
        }
        let routes = table.len();
        self.snapshot.store(Arc::new(table));

        metrics::record_refresh(routes);
        tracing::debug!(routes, "route cache rebuilt");
    }

    /// Look up a handler, healing a miss with a single refresh.
    ///
    /// On a miss the cache is rebuilt once and the lookup retried; the
    /// second answer is final either way. This bounds rebuild cost to one
    /// per distinct previously-unseen handler, since later lookups for the
    /// same handler hit the cache.
    pub fn lookup_or_refresh(&self, handler: &str) -> Option<String> {
        if let Some(path) = self.lookup(handler) {
            return Some(path);
        }
        tracing::trace!(handler, "route cache miss, rebuilding");
        self.refresh();
        self.lookup(handler)
    }

    /// Number of routes in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    /// Whether the current snapshot holds no routes.
    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}
