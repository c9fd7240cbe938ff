//! Ollama client implementation.

use std::sync::Arc;

use ollama_rs::Ollama;

use super::OllamaConfig;
use crate::{Result, TRACING_TARGET_CLIENT};

struct OllamaClientInner {
    ollama: Ollama,
    config: OllamaConfig,
}

/// Ollama client used to embed search queries.
///
/// Construction does not contact the server; use [`OllamaClient::health_check`]
/// to verify connectivity.
///
/// # Examples
///
/// ```rust,ignore
/// use vecview_ollama::{OllamaClient, OllamaConfig};
///
/// let client = OllamaClient::new(OllamaConfig::default())?;
/// let embedder = vecview_core::embedding::EmbeddingService::new(client);
/// ```
#[derive(Clone)]
pub struct OllamaClient {
    inner: Arc<OllamaClientInner>,
}

impl std::fmt::Debug for OllamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl OllamaClient {
    /// Create a new Ollama client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port do not form a valid URL.
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let url = config.url()?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            model = %config.embedding_model,
            "Creating Ollama client"
        );

        let inner = OllamaClientInner {
            ollama: Ollama::from_url(url),
            config,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &OllamaConfig {
        &self.inner.config
    }

    /// Returns the model used for query embeddings.
    pub fn embedding_model(&self) -> &str {
        &self.inner.config.embedding_model
    }

    pub(crate) fn ollama(&self) -> &Ollama {
        &self.inner.ollama
    }

    /// Verifies that the server is reachable by listing its local models.
    pub async fn health_check(&self) -> Result<()> {
        let models = self.ollama().list_local_models().await?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            models = models.len(),
            "Health check successful"
        );

        Ok(())
    }
}
