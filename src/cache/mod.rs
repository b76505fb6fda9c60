//! Handler-to-route-template cache subsystem.
//!
//! # Data Flow
//! ```text
//! RoutesProvider (external router's registration table)
//!     → route_cache.rs refresh (build fresh map, atomic swap)
//!     → route_cache.rs lookup (read current snapshot)
//!     → Return: Some(template) or None
//! ```
//!
//! # Design Decisions
//! - The route table may be incomplete when the cache is constructed
//!   (routes registered after the middleware is installed), so a miss
//!   triggers one rebuild before the answer is final
//! - Rebuilds always replace the whole snapshot, never merge or patch:
//!   a provider that stops reporting a route removes it from the cache
//! - Concurrent rebuilds are safe but redundant; last swap wins

pub mod provider;
pub mod route_cache;

pub use provider::{RouteEntry, RoutesProvider};
pub use route_cache::RouteCache;
