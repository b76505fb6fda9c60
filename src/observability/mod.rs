//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured log events via `tracing`, emitted inline at call sites
//! - Metric updates are cheap (atomic increments through the `metrics`
//!   facade); the exporter belongs to the embedding application
//! - No subscriber or recorder is installed by the library

pub mod metrics;
