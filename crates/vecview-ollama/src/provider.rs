//! [`EmbeddingProvider`] implementation for Ollama.

use std::time::Instant;

use ollama_rs::generation::embeddings::request::GenerateEmbeddingsRequest;
use vecview_core::embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
use vecview_core::{Error, ServiceHealth};

use crate::{OllamaClient, TRACING_TARGET_CLIENT};

#[async_trait::async_trait]
impl EmbeddingProvider for OllamaClient {
    async fn generate_embedding(
        &self,
        request: &EmbeddingRequest,
    ) -> vecview_core::Result<EmbeddingResponse> {
        let model = self.embedding_model();
        let started_at = Instant::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            request_id = %request.request_id,
            model = %model,
            "Generating embedding"
        );

        let embed_request =
            GenerateEmbeddingsRequest::new(model.to_string(), request.text.as_str().into());
        let result = self.ollama().generate_embeddings(embed_request).await;
        let elapsed = started_at.elapsed();

        match result {
            Ok(response) => {
                // One input yields one embedding.
                let embedding = response.embeddings.into_iter().next().ok_or_else(|| {
                    Error::external_error().with_message("No embedding returned")
                })?;

                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    request_id = %request.request_id,
                    dimensions = embedding.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Embedding generated"
                );

                Ok(request.reply(embedding).with_model(model))
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_CLIENT,
                    request_id = %request.request_id,
                    error = %e,
                    elapsed_ms = elapsed.as_millis(),
                    "Embedding generation failed"
                );

                Err(crate::Error::from(e).into())
            }
        }
    }

    async fn health_check(&self) -> vecview_core::Result<ServiceHealth> {
        let started_at = Instant::now();
        let health = match OllamaClient::health_check(self).await {
            Ok(()) => ServiceHealth::healthy(),
            Err(e) => ServiceHealth::unhealthy(e.to_string()),
        };
        Ok(health.with_response_time(started_at.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use vecview_core::embedding::EmbeddingService;

    use super::*;
    use crate::OllamaConfig;

    #[tokio::test]
    async fn refused_connection_is_connectivity_error() -> crate::Result<()> {
        let config = OllamaConfig::builder()
            .with_ollama_host("127.0.0.1")
            .with_ollama_port(1u16)
            .build()?;
        let embedder = EmbeddingService::new(OllamaClient::new(config)?);

        let Err(error) = embedder.embed_text("hello").await else {
            unreachable!("nothing listens on port 1")
        };
        assert!(error.is_connectivity(), "unexpected error: {error}");
        Ok(())
    }
}
