//! Chroma client configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Default timeout for Chroma requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Chroma connection.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ChromaConfig {
    /// Chroma server host.
    #[cfg_attr(
        feature = "config",
        arg(long = "chroma-host", env = "CHROMA_HOST", default_value = "localhost")
    )]
    #[serde(default = "default_host")]
    pub chroma_host: String,

    /// Chroma server port.
    #[cfg_attr(
        feature = "config",
        arg(long = "chroma-port", env = "CHROMA_PORT", default_value = "8000")
    )]
    #[serde(default = "default_port")]
    pub chroma_port: u16,

    /// Tenant that owns the database.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "chroma-tenant",
            env = "CHROMA_TENANT",
            default_value = "default_tenant"
        )
    )]
    #[serde(default = "default_tenant")]
    pub chroma_tenant: String,

    /// Database holding the collections.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "chroma-database",
            env = "CHROMA_DATABASE",
            default_value = "default_database"
        )
    )]
    #[serde(default = "default_database")]
    pub chroma_database: String,

    /// Connect over HTTPS.
    #[cfg_attr(feature = "config", arg(long = "chroma-ssl", env = "CHROMA_SSL"))]
    #[serde(default)]
    pub chroma_ssl: bool,

    /// Token sent as `Authorization: Bearer`.
    #[cfg_attr(
        feature = "config",
        arg(long = "chroma-auth-token", env = "CHROMA_AUTH_TOKEN")
    )]
    #[serde(default)]
    pub chroma_auth_token: Option<String>,

    /// Request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "chroma-timeout", env = "CHROMA_TIMEOUT", default_value_t = 30)
    )]
    #[serde(default = "default_timeout_secs")]
    pub chroma_timeout: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_tenant() -> String {
    "default_tenant".to_string()
}

fn default_database() -> String {
    "default_database".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            chroma_host: default_host(),
            chroma_port: default_port(),
            chroma_tenant: default_tenant(),
            chroma_database: default_database(),
            chroma_ssl: false,
            chroma_auth_token: None,
            chroma_timeout: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ChromaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromaConfig")
            .field("chroma_host", &self.chroma_host)
            .field("chroma_port", &self.chroma_port)
            .field("chroma_tenant", &self.chroma_tenant)
            .field("chroma_database", &self.chroma_database)
            .field("chroma_ssl", &self.chroma_ssl)
            .field("chroma_auth_token", &self.chroma_auth_token.as_ref().map(|_| "***"))
            .field("chroma_timeout", &self.chroma_timeout)
            .finish()
    }
}

impl ChromaConfig {
    /// Create a new configuration with host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            chroma_host: host.into(),
            chroma_port: port,
            ..Self::default()
        }
    }

    /// Set the tenant and database.
    #[must_use]
    pub fn with_database(mut self, tenant: impl Into<String>, database: impl Into<String>) -> Self {
        self.chroma_tenant = tenant.into();
        self.chroma_database = database.into();
        self
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.chroma_auth_token = Some(token.into());
        self
    }

    /// Enable or disable TLS.
    #[must_use]
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.chroma_ssl = ssl;
        self
    }

    /// Returns the server root URL, e.g. `http://localhost:8000/`.
    pub fn base_url(&self) -> Result<Url> {
        let scheme = if self.chroma_ssl { "https" } else { "http" };
        let url = Url::parse(&format!(
            "{scheme}://{}:{}/",
            self.chroma_host, self.chroma_port
        ))?;
        Ok(url)
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.chroma_timeout == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.chroma_timeout)
        }
    }

    /// Returns the bearer token, ignoring blank values.
    pub fn effective_auth_token(&self) -> Option<&str> {
        self.chroma_auth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
