//! Ollama client configuration.

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Configuration for the Ollama embedder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(
    name = "OllamaConfigBuilder",
    pattern = "owned",
    setter(into, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct OllamaConfig {
    /// Ollama server host (e.g., "localhost" or "https://ollama.internal")
    #[cfg_attr(
        feature = "config",
        arg(long = "ollama-host", env = "OLLAMA_HOST", default_value = "localhost")
    )]
    #[serde(default = "default_host")]
    #[builder(default = "default_host()")]
    pub ollama_host: String,

    /// Ollama server port
    #[cfg_attr(
        feature = "config",
        arg(long = "ollama-port", env = "OLLAMA_PORT", default_value = "11434")
    )]
    #[serde(default = "default_port")]
    #[builder(default = "default_port()")]
    pub ollama_port: u16,

    /// Model used to embed search queries
    #[cfg_attr(
        feature = "config",
        arg(
            long = "ollama-embedding-model",
            env = "OLLAMA_EMBEDDING_MODEL",
            default_value = "all-minilm"
        )
    )]
    #[serde(default = "default_embedding_model")]
    #[builder(default = "default_embedding_model()")]
    pub embedding_model: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    11434
}

fn default_embedding_model() -> String {
    "all-minilm".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            ollama_host: default_host(),
            ollama_port: default_port(),
            embedding_model: default_embedding_model(),
        }
    }
}

impl OllamaConfig {
    /// Create a new configuration builder
    pub fn builder() -> OllamaConfigBuilder {
        OllamaConfigBuilder::default()
    }

    /// Returns the full URL for the Ollama server.
    ///
    /// A host without a scheme is reached over plain HTTP.
    pub fn url(&self) -> Result<Url> {
        let host = self.ollama_host.trim_end_matches('/');
        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| Error::invalid_config(format!("Invalid Ollama host '{host}': {e}")))?;
        url.set_port(Some(self.ollama_port))
            .map_err(|()| Error::invalid_config(format!("Ollama host '{host}' cannot have a port")))?;
        Ok(url)
    }
}

impl OllamaConfigBuilder {
    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(host) = &self.ollama_host
            && host.trim().is_empty()
        {
            return Err("Ollama host must not be empty".to_string());
        }

        if self.ollama_port == Some(0) {
            return Err("Ollama port must be greater than 0".to_string());
        }

        if let Some(model) = &self.embedding_model
            && model.trim().is_empty()
        {
            return Err("Embedding model must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() -> Result<()> {
        let config = OllamaConfig::default();
        assert_eq!(config.embedding_model, "all-minilm");
        assert_eq!(config.url()?.as_str(), "http://localhost:11434/");
        Ok(())
    }

    #[test]
    fn test_builder_matches_default() -> Result<()> {
        assert_eq!(OllamaConfig::builder().build()?, OllamaConfig::default());
        Ok(())
    }

    #[test]
    fn test_host_with_scheme() -> Result<()> {
        let config = OllamaConfig::builder()
            .with_ollama_host("https://ollama.internal/")
            .with_ollama_port(8443u16)
            .build()?;
        assert_eq!(config.url()?.as_str(), "https://ollama.internal:8443/");
        Ok(())
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let result = OllamaConfig::builder().with_embedding_model("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let result = OllamaConfig::builder().with_ollama_port(0u16).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_defaults() -> serde_json::Result<()> {
        let config: OllamaConfig = serde_json::from_str(r#"{"embedding_model": "nomic-embed-text"}"#)?;
        assert_eq!(config.ollama_port, 11434);
        assert_eq!(config.embedding_model, "nomic-embed-text");
        Ok(())
    }
}
