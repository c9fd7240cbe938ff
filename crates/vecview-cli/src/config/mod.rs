//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig      # Host, port, shutdown
//! ├── recovery: RecoveryConfig  # Request timeout
//! ├── chroma: ChromaConfig      # Chroma host, port, tenant, database
//! └── ollama: OllamaConfig      # Ollama host, port, embedding model
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.

mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vecview_chroma::ChromaConfig;
use vecview_ollama::OllamaConfig;
use vecview_server::middleware::RecoveryConfig;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "vecview")]
#[command(about = "Browse, search and export a Chroma vector store")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Request timeout handling.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,

    /// Chroma connection.
    #[clap(flatten)]
    pub chroma: ChromaConfig,

    /// Ollama connection used to embed search queries.
    #[clap(flatten)]
    pub ollama: OllamaConfig,
}

impl Cli {
    /// Loads `.env` (if enabled) and parses CLI arguments.
    ///
    /// The `.env` file is read first so clap's `env` lookups see its values.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;

        if self.recovery.request_timeout == 0 {
            anyhow::bail!("request timeout must be at least 1 second");
        }

        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            dotenv = cfg!(feature = "dotenv"),
            "Build information"
        );

        self.server.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            chroma_host = %self.chroma.chroma_host,
            chroma_port = self.chroma.chroma_port,
            chroma_tenant = %self.chroma.chroma_tenant,
            chroma_database = %self.chroma.chroma_database,
            chroma_ssl = self.chroma.chroma_ssl,
            chroma_auth = self.chroma.chroma_auth_token.is_some(),
            "Chroma configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            ollama_host = %self.ollama.ollama_host,
            ollama_port = self.ollama.ollama_port,
            embedding_model = %self.ollama.embedding_model,
            request_timeout_secs = self.recovery.request_timeout,
            "Embedding configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_from_empty_args() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["vecview", "--host", "127.0.0.1"])?;

        assert_eq!(cli.server.port, 8501);
        assert_eq!(cli.chroma.chroma_host, "localhost");
        assert_eq!(cli.chroma.chroma_port, 8000);
        assert_eq!(cli.ollama.ollama_port, 11434);
        cli.validate()?;
        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "vecview",
            "--host",
            "127.0.0.1",
            "--chroma-host",
            "chroma.internal",
            "--chroma-port",
            "9000",
            "--port",
            "9100",
        ])?;

        assert_eq!(cli.chroma.chroma_host, "chroma.internal");
        assert_eq!(cli.chroma.chroma_port, 9000);
        assert_eq!(cli.server.port, 9100);
        Ok(())
    }
}
