use serde::{Deserialize, Serialize};
use vecview_core::ServiceHealth;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorStatusResponse {
    /// Mirrors the vector store's health; decides the status code.
    pub is_healthy: bool,
    pub vector_store: ServiceHealth,
    /// Reported for information only.
    pub embedder: ServiceHealth,
}
