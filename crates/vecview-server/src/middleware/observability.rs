//! Request IDs, request spans and per-request timing.

use std::time::Instant;

use axum::Router;
use axum::extract::Request;
use axum::http::header;
use axum::middleware::{Next, from_fn};
use axum::response::Response;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use crate::TRACING_TARGET_METRICS;

/// Extension trait for `axum::`[`Router`] to apply observability middleware.
pub trait RouterObservabilityExt<S> {
    /// Layers request IDs, a tracing span per request, and redaction of the
    /// `Authorization` and `Cookie` headers.
    fn with_observability(self) -> Self;

    /// Layers a middleware that logs method, path, status and duration of
    /// every request.
    fn with_metrics(self) -> Self;
}

impl<S> RouterObservabilityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        self.layer(PropagateRequestIdLayer::new(
            header::HeaderName::from_static("x-request-id"),
        ))
        .layer(SetSensitiveRequestHeadersLayer::new([
            header::AUTHORIZATION,
            header::COOKIE,
        ]))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static("x-request-id"),
            MakeRequestUuid,
        ))
    }

    fn with_metrics(self) -> Self {
        self.layer(from_fn(track_request_timing))
    }
}

/// Route groups used to tag request logs.
fn route_category(path: &str) -> &'static str {
    if path == "/" {
        "dashboard"
    } else if path.ends_with("/export") {
        "export"
    } else if path.ends_with("/search") {
        "search"
    } else if path.starts_with("/api/") {
        "api"
    } else if path.starts_with("/health") {
        "monitoring"
    } else {
        "unknown"
    }
}

/// Logs each request with its category and elapsed time.
pub async fn track_request_timing(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let category = route_category(uri.path());

    let response = next.run(request).await;

    tracing::debug!(
        target: TRACING_TARGET_METRICS,
        method = %method,
        uri = %uri,
        category,
        status = %response.status(),
        duration_ms = started_at.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_routes() {
        assert_eq!(route_category("/"), "dashboard");
        assert_eq!(route_category("/api/collections"), "api");
        assert_eq!(route_category("/api/collections/docs/search"), "search");
        assert_eq!(route_category("/api/collections/docs/export"), "export");
        assert_eq!(route_category("/health"), "monitoring");
        assert_eq!(route_category("/favicon.ico"), "unknown");
    }
}
