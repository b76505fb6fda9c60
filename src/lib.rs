//! Route-template annotation for request pipelines.
//!
//! Maps an opaque handler identifier to the normalized route template it was
//! registered under (`/foo/{bar}` instead of `/foo/baz`), so that loggers and
//! metric emitters can label requests without inflating cardinality.
//!
//! # Data Flow
//! ```text
//! External router (registration table)
//!     → RoutesProvider (snapshot callback)
//!     → RouteCache.refresh (rebuild + atomic swap)
//!     → RouteCache.lookup (lock-free read)
//!     → RouteLabelLayer (per-request: lookup, heal on miss)
//!     → RoutePath request extension
//!     → downstream consumers (loggers, metrics)
//! ```
//!
//! # Design Decisions
//! - The cache is an explicitly constructed value, injected into the
//!   pipeline; tests build isolated instances with isolated providers
//! - A lookup miss is treated as "possibly stale": one synchronous rebuild,
//!   one re-check, then the result stands. No retry loop
//! - Snapshots are immutable and replaced wholesale; readers never observe
//!   a partially built table
//! - Annotation never alters or aborts the request

pub mod cache;
pub mod http;
pub mod observability;

pub use cache::{RouteCache, RouteEntry, RoutesProvider};
pub use http::{HandlerId, RouteLabelLayer, RoutePath, RoutePathExt, ROUTE_PATH_KEY};
