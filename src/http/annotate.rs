//! Route-template annotation middleware.
//!
//! # Responsibilities
//! - Read the handler identifier resolved for the current request
//! - Resolve it to a route template via the cache, healing one miss
//! - Attach the template to the request for downstream consumers
//!
//! # Design Decisions
//! - Annotation never alters the response or aborts the request; an
//!   unresolved handler yields an empty template, not an error
//! - The service's future is the inner service's future: no boxing, no
//!   allocation on the hit path beyond the template clone

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

use crate::cache::RouteCache;

/// Field name under which the matched route template is reported in logs
/// and metrics.
pub const ROUTE_PATH_KEY: &str = "route_path";

/// Handler identifier resolved by the router for the current request.
///
/// Inserted into request extensions by the embedding framework before
/// [`RouteLabelLayer`] runs. When absent, the request is annotated as
/// unresolved (empty template).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerId(pub String);

impl HandlerId {
    /// Create a handler id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The matched route template for the current request.
///
/// Written by [`RouteLabelLayer`] exactly once per request; empty when the
/// handler could not be resolved to a registered route. Read it with
/// [`RoutePathExt::route_path`] or axum's `Extension<RoutePath>` extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath(pub String);

impl RoutePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-side access to the annotations carried in request extensions.
pub trait RoutePathExt {
    /// The matched route template, if the annotation layer has run.
    fn route_path(&self) -> Option<&str>;

    /// The resolved handler identifier, if the router provided one.
    fn handler_id(&self) -> Option<&str>;
}

impl<B> RoutePathExt for Request<B> {
    fn route_path(&self) -> Option<&str> {
        self.extensions().get::<RoutePath>().map(RoutePath::as_str)
    }

    fn handler_id(&self) -> Option<&str> {
        self.extensions().get::<HandlerId>().map(HandlerId::as_str)
    }
}

/// Layer that annotates each request with its matched route template.
///
/// Must sit *inside* whatever inserts [`HandlerId`] (layers run outermost
/// first), so the identifier is present by the time this service reads it.
/// The first requests may arrive before the router has finished
/// registering routes; the cache heals such misses with one rebuild per
/// previously-unseen handler.
#[derive(Clone)]
pub struct RouteLabelLayer {
    cache: Arc<RouteCache>,
}

impl RouteLabelLayer {
    /// Create a layer sharing the given cache.
    pub fn new(cache: Arc<RouteCache>) -> Self {
        Self { cache }
    }
}

impl<S> Layer<S> for RouteLabelLayer {
    type Service = RouteLabelService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RouteLabelService {
            inner,
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Service produced by [`RouteLabelLayer`].
#[derive(Clone)]
pub struct RouteLabelService<S> {
    inner: S,
    cache: Arc<RouteCache>,
}

impl<S, B> Service<Request<B>> for RouteLabelService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let handler = req.handler_id().unwrap_or_default().to_owned();
        let path = self.cache.lookup_or_refresh(&handler).unwrap_or_default();
        req.extensions_mut().insert(RoutePath(path));
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RouteEntry;
    use axum::body::Body;
    use tower::util::service_fn;
    use tower::ServiceExt;

    fn cache_with(routes: Vec<RouteEntry>) -> Arc<RouteCache> {
        Arc::new(RouteCache::new(move || routes.clone()))
    }

    async fn annotated_path(
        cache: Arc<RouteCache>,
        req: Request<Body>,
    ) -> RoutePath {
        let inner = service_fn(|req: Request<Body>| async move {
            let path = req
                .extensions()
                .get::<RoutePath>()
                .cloned()
                .expect("annotation layer must insert RoutePath");
            Ok::<_, std::convert::Infallible>(path)
        });
        RouteLabelLayer::new(cache)
            .layer(inner)
            .oneshot(req)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn annotates_resolved_handler() {
        let cache = cache_with(vec![RouteEntry::new("h1", "/foo/{bar}")]);
        let mut req = Request::new(Body::empty());
        req.extensions_mut().insert(HandlerId::new("h1"));

        let path = annotated_path(cache, req).await;
        assert_eq!(path.as_str(), "/foo/{bar}");
    }

    #[tokio::test]
    async fn missing_handler_id_annotates_empty() {
        let cache = cache_with(vec![RouteEntry::new("h1", "/foo/{bar}")]);
        let req = Request::new(Body::empty());

        let path = annotated_path(cache, req).await;
        assert_eq!(path.as_str(), "");
    }

    #[tokio::test]
    async fn unregistered_handler_annotates_empty() {
        let cache = cache_with(vec![]);
        let mut req = Request::new(Body::empty());
        req.extensions_mut().insert(HandlerId::new("nope"));

        let path = annotated_path(cache, req).await;
        assert_eq!(path.as_str(), "");
    }

    #[test]
    fn ext_trait_reads_both_annotations() {
        let mut req = Request::new(());
        assert_eq!(req.handler_id(), None);
        assert_eq!(req.route_path(), None);

        req.extensions_mut().insert(HandlerId::new("h1"));
        req.extensions_mut().insert(RoutePath("/foo/{bar}".into()));
        assert_eq!(req.handler_id(), Some("h1"));
        assert_eq!(req.route_path(), Some("/foo/{bar}"));
    }
}
