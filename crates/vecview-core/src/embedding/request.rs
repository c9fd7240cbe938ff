//! Request and response types for embedding operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for embedding a single piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// The text to embed.
    pub text: String,
}

impl EmbeddingRequest {
    /// Creates a new request for the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
        }
    }

    /// Creates a response to this request carrying the given vector.
    pub fn reply(&self, embedding: Vec<f32>) -> EmbeddingResponse {
        EmbeddingResponse {
            request_id: self.request_id,
            embedding,
            model: None,
        }
    }
}

/// Response carrying the embedding produced for an [`EmbeddingRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Identifier of the request this response answers.
    pub request_id: Uuid,
    /// The embedding vector.
    pub embedding: Vec<f32>,
    /// The model that produced the embedding, if the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl EmbeddingResponse {
    /// Sets the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Returns the dimensionality of the embedding.
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
