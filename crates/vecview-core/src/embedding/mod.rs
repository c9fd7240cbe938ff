//! Query embedding abstractions.
//!
//! Chroma's REST query endpoint only accepts vectors, so a free-text query has
//! to be embedded before it can be sent. This module defines the provider seam
//! for that step without depending on any concrete model server.

mod request;
mod service;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockEmbedder;
pub use request::{EmbeddingRequest, EmbeddingResponse};
pub use service::EmbeddingService;

pub use crate::{Error, ErrorKind, Result, ServiceHealth};

/// Core trait for turning text into an embedding vector.
///
/// Implement this trait to plug a model server into the search flow.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generates the embedding for the request's text.
    async fn generate_embedding(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse>;

    /// Performs a health check on the embedding provider.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
