//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! ```rust,no_run
//! use vecview_chroma::{ChromaClient, ChromaConfig, VectorStoreService};
//! use vecview_core::embedding::EmbeddingService;
//! use vecview_server::handler::routes;
//! use vecview_server::service::ServiceState;
//!
//! # fn example(embedder: EmbeddingService) -> anyhow::Result<()> {
//! let client = ChromaClient::new(ChromaConfig::default())?;
//! let state = ServiceState::new(VectorStoreService::new(client), embedder);
//! let app: axum::Router = routes().with_state(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod collections;
mod dashboard;
mod error;
mod export;
mod monitors;
mod search;

pub mod request;
pub mod response;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with the dashboard page and every API route.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(dashboard::routes())
        .merge(collections::routes())
        .merge(search::routes())
        .merge(export::routes())
        .merge(monitors::routes())
        .fallback(fallback)
}
