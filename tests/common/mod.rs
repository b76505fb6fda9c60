//! Shared utilities for integration and stress testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use route_label::RouteEntry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the test tracing subscriber. Safe to call from every test;
/// only the first install wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_label=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Mutable registration table standing in for an external router.
///
/// Routes can be registered after a cache has been constructed over the
/// provider, reproducing the startup ordering the cache is built to
/// tolerate. Provider invocations are counted for instrumentation asserts.
#[derive(Clone, Default)]
pub struct RouteRegistry {
    routes: Arc<RwLock<Vec<RouteEntry>>>,
    provider_calls: Arc<AtomicUsize>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a route template.
    pub fn register(&self, handler: &str, path: &str) {
        self.routes
            .write()
            .unwrap()
            .push(RouteEntry::new(handler, path));
    }

    /// Replace the whole registration table.
    #[allow(dead_code)]
    pub fn replace(&self, routes: Vec<RouteEntry>) {
        *self.routes.write().unwrap() = routes;
    }

    /// Snapshot callback handed to the cache.
    pub fn provider(&self) -> impl Fn() -> Vec<RouteEntry> + Send + Sync + 'static {
        let routes = Arc::clone(&self.routes);
        let calls = Arc::clone(&self.provider_calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            routes.read().unwrap().clone()
        }
    }

    /// How many times the provider has been invoked.
    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::SeqCst)
    }
}
