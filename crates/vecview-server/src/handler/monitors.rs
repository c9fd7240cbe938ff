//! Health check handler.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use vecview_chroma::VectorStoreService;
use vecview_core::ServiceHealth;
use vecview_core::embedding::EmbeddingService;

use super::response::MonitorStatusResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "vecview_server::handler::monitors";

/// Reports 200 if Chroma answers its heartbeat, 503 otherwise.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(vector_store): State<VectorStoreService>,
    State(embedding_service): State<EmbeddingService>,
) -> (StatusCode, Json<MonitorStatusResponse>) {
    let vector_store = vector_store
        .health_check()
        .await
        .unwrap_or_else(|error| ServiceHealth::unhealthy(error.to_string()));
    let embedder = embedding_service
        .health_check()
        .await
        .unwrap_or_else(|error| ServiceHealth::unhealthy(error.to_string()));

    let is_healthy = vector_store.is_healthy();
    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::info!(
        target: TRACING_TARGET,
        is_healthy,
        embedder_healthy = embedder.is_healthy(),
        status_code = status_code.as_u16(),
        "Health status response prepared"
    );

    let response = MonitorStatusResponse {
        is_healthy,
        vector_store,
        embedder,
    };

    (status_code, Json(response))
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}
