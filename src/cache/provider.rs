//! Routing-table snapshot provider contract.

/// A single registered route as reported by the external router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Opaque handler identifier, unique per registered route.
    pub handler: String,
    /// Normalized route template, e.g. `/users/{id}`.
    pub path: String,
}

impl RouteEntry {
    /// Create a new route entry.
    pub fn new(handler: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            path: path.into(),
        }
    }
}

/// Source of the current routing table.
///
/// Must reflect the registration state at call time, not a point-in-time
/// copy taken earlier. May be called zero, one, or many times over the
/// cache's lifetime, and concurrently with itself when refreshes overlap.
/// Expected to be an in-memory scan of the router's registration table;
/// implementations that block indefinitely violate the contract.
pub trait RoutesProvider: Send + Sync {
    /// Return every currently registered route.
    fn routes(&self) -> Vec<RouteEntry>;
}

impl<F> RoutesProvider for F
where
    F: Fn() -> Vec<RouteEntry> + Send + Sync,
{
    fn routes(&self) -> Vec<RouteEntry> {
        self()
    }
}
