//! Chroma client module.
//!
//! This module provides the connection handle for the Chroma REST API.

mod chroma_client;
mod chroma_config;
mod provider;

pub use chroma_client::ChromaClient;
pub use chroma_config::ChromaConfig;
