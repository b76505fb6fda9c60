//! Cache metrics.
//!
//! # Metrics
//! - `route_cache_lookups_total` (counter): lookups by result (`hit`/`miss`)
//! - `route_cache_refreshes_total` (counter): snapshot rebuilds
//! - `route_cache_routes` (gauge): routes in the current snapshot

use metrics::{counter, describe_counter, describe_gauge, gauge};

pub const LOOKUPS_TOTAL: &str = "route_cache_lookups_total";
pub const REFRESHES_TOTAL: &str = "route_cache_refreshes_total";
pub const ROUTES: &str = "route_cache_routes";

/// Register metric descriptions with the installed recorder.
///
/// Optional; call once at startup if the embedding application wants
/// described metrics in its exposition.
pub fn describe_metrics() {
    describe_counter!(LOOKUPS_TOTAL, "Route cache lookups by result (hit/miss).");
    describe_counter!(REFRESHES_TOTAL, "Route cache snapshot rebuilds.");
    describe_gauge!(ROUTES, "Routes in the current cache snapshot.");
}

/// Record a lookup outcome.
pub(crate) fn record_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!(LOOKUPS_TOTAL, "result" => result).increment(1);
}

/// Record a snapshot rebuild and the resulting table size.
pub(crate) fn record_refresh(routes: usize) {
    counter!(REFRESHES_TOTAL).increment(1);
    gauge!(ROUTES).set(routes as f64);
}
