//! Request-pipeline integration.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → router resolves handler, inserts HandlerId extension (outer layer)
//!     → annotate.rs (lookup template, heal miss, insert RoutePath)
//!     → inner service / handler
//!     → downstream consumers read RoutePath for log/metric labels
//! ```

pub mod annotate;

pub use annotate::{HandlerId, RouteLabelLayer, RoutePath, RoutePathExt, ROUTE_PATH_KEY};
