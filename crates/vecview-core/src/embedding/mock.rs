//! Mock embedding provider for testing.
//!
//! Returns configured vectors for known texts and a deterministic vector
//! derived from the text bytes otherwise. Every call is counted so tests can
//! assert that a code path never reached the model.
//!
//! ```toml
//! [dev-dependencies]
//! vecview-core = { version = "...", features = ["test-utils"] }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, EmbeddingService, Error, Result,
    ServiceHealth,
};

/// In-memory [`EmbeddingProvider`] for tests.
#[derive(Debug, Clone)]
pub struct MockEmbedder {
    dimensions: usize,
    known: HashMap<String, Vec<f32>>,
    calls: Arc<AtomicUsize>,
    unreachable: bool,
}

impl MockEmbedder {
    /// Creates a mock that produces vectors of the given dimensionality.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            known: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
            unreachable: false,
        }
    }

    /// Makes every call fail as if the model server refused the connection.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Registers a fixed vector for the given text.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.known.insert(text.into(), vector);
        self
    }

    /// Returns how many embeddings were requested so far.
    ///
    /// The counter is shared between clones, so it stays readable after the
    /// mock has been moved into an [`EmbeddingService`].
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wraps a clone of this mock into an [`EmbeddingService`].
    pub fn to_service(&self) -> EmbeddingService {
        EmbeddingService::new(self.clone())
    }

    fn hashed_vector(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.dimensions];
        if self.dimensions == 0 {
            return vector;
        }
        for (i, byte) in text.bytes().enumerate() {
            vector[i % self.dimensions] += f32::from(byte) / 255.0;
        }
        vector
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn generate_embedding(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(Error::network_error().with_message("Could not connect to Ollama"));
        }

        let embedding = self
            .known
            .get(&request.text)
            .cloned()
            .unwrap_or_else(|| self.hashed_vector(&request.text));

        Ok(request.reply(embedding).with_model("mock"))
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        if self.unreachable {
            return Ok(ServiceHealth::unhealthy("Could not connect to Ollama"));
        }
        Ok(ServiceHealth::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_text_returns_fixed_vector() {
        let mock = MockEmbedder::new(2).with_vector("hello", vec![0.1, 0.2]);
        let service = mock.to_service();

        let response = service.embed_text("hello").await.unwrap();
        assert_eq!(response.embedding, vec![0.1, 0.2]);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn unknown_text_is_deterministic() {
        let mock = MockEmbedder::new(4);
        let service = mock.to_service();

        let first = service.embed_text("abc").await.unwrap();
        let second = service.embed_text("abc").await.unwrap();
        assert_eq!(first.embedding, second.embedding);
        assert_eq!(first.dimensions(), 4);
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn unreachable_embedder_fails_with_connectivity() {
        let mock = MockEmbedder::new(2).unreachable();
        let service = mock.to_service();

        let result = service.embed_text("hello").await;
        assert!(matches!(result, Err(e) if e.is_connectivity()));
        assert_eq!(mock.calls(), 1);
    }
}
