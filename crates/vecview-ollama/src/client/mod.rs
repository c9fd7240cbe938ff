//! Ollama client module.
//!
//! Wraps the `ollama-rs` crate for use as a query embedder.

mod ollama_client;
mod ollama_config;

pub use ollama_client::OllamaClient;
pub use ollama_config::{OllamaConfig, OllamaConfigBuilder, OllamaConfigBuilderError};
