//! Embedding service wrapper for dependency injection.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, Result, ServiceHealth};
use crate::TRACING_TARGET_EMBEDDING;

/// Cloneable handle over any [`EmbeddingProvider`].
#[derive(Clone)]
pub struct EmbeddingService {
    inner: Arc<dyn EmbeddingProvider>,
}

impl fmt::Debug for EmbeddingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingService").finish_non_exhaustive()
    }
}

impl EmbeddingService {
    /// Create a new embedding service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: EmbeddingProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Embeds the given text.
    pub async fn embed_text(&self, text: &str) -> Result<EmbeddingResponse> {
        self.generate_embedding(&EmbeddingRequest::new(text)).await
    }

    /// Generates the embedding for a request.
    pub async fn generate_embedding(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET_EMBEDDING,
            request_id = %request.request_id,
            text_len = request.text.len(),
            "Generating query embedding"
        );

        let result = self.inner.generate_embedding(request).await;
        let elapsed = started_at.elapsed();

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_EMBEDDING,
                    request_id = %request.request_id,
                    dimensions = response.dimensions(),
                    elapsed_ms = elapsed.as_millis(),
                    "Query embedding generated"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_EMBEDDING,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Query embedding failed"
                );
            }
        }

        result
    }

    /// Performs a health check on the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}
