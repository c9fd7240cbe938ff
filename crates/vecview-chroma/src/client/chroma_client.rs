//! Chroma REST client.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use vecview_data::ItemBatch;

use super::ChromaConfig;
use crate::TRACING_TARGET_CLIENT;
use crate::error::{Error, Result};
use crate::types::{Collection, GetRequest, Heartbeat, QueryBatch, QueryRequest};

/// Inner client that holds the HTTP client and configuration.
struct ChromaClientInner {
    http: Client,
    config: ChromaConfig,
    base_url: Url,
}

/// Connection handle for a Chroma server.
///
/// Built once at startup and shared by cloning; clones reuse the same
/// connection pool. Construction does not contact the server, so an
/// unreachable server surfaces on first use.
///
/// # Examples
///
/// ```rust,ignore
/// use vecview_chroma::{ChromaClient, ChromaConfig};
///
/// let client = ChromaClient::new(ChromaConfig::default())?;
/// let collections = client.list_collections().await?;
/// ```
#[derive(Clone)]
pub struct ChromaClient {
    inner: Arc<ChromaClientInner>,
}

impl std::fmt::Debug for ChromaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromaClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ChromaClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(config: ChromaConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let timeout = config.effective_timeout();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %base_url,
            tenant = %config.chroma_tenant,
            database = %config.chroma_database,
            timeout_ms = timeout.as_millis(),
            "Creating Chroma client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(format!("vecview/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let inner = ChromaClientInner {
            http,
            config,
            base_url,
        };

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            base_url = %inner.base_url,
            "Chroma client created"
        );

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ChromaConfig {
        &self.inner.config
    }

    /// Gets the server root URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Calls the heartbeat endpoint and returns the server clock in nanoseconds.
    pub async fn heartbeat(&self) -> Result<u64> {
        let url = self.endpoint(&["api", "v2", "heartbeat"])?;
        let heartbeat: Heartbeat = self.send(self.request(Method::GET, url)).await?;
        Ok(heartbeat.nanosecond_heartbeat)
    }

    /// Lists every collection in the configured database.
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        let url = self.collections_endpoint(&[])?;
        self.send(self.request(Method::GET, url)).await
    }

    /// Looks up a collection by name.
    pub async fn get_collection(&self, name: &str) -> Result<Collection> {
        let url = self.collections_endpoint(&[name])?;
        self.send(self.request(Method::GET, url)).await
    }

    /// Fetches every item of a collection with documents, metadatas and embeddings.
    pub async fn get_items(&self, collection_id: &str) -> Result<ItemBatch> {
        let url = self.collections_endpoint(&[collection_id, "get"])?;
        self.post_json(url, &GetRequest::all_columns()).await
    }

    /// Runs a nearest-neighbour query with a single embedding.
    pub async fn query_items(
        &self,
        collection_id: &str,
        embedding: Vec<f32>,
        n_results: usize,
    ) -> Result<QueryBatch> {
        let url = self.collections_endpoint(&[collection_id, "query"])?;
        self.post_json(url, &QueryRequest::single(embedding, n_results))
            .await
    }

    /// Builds `base_url` + the given path segments, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds `/api/v2/tenants/{tenant}/databases/{database}/collections/...`.
    fn collections_endpoint(&self, rest: &[&str]) -> Result<Url> {
        let config = &self.inner.config;
        let mut segments = vec![
            "api",
            "v2",
            "tenants",
            config.chroma_tenant.as_str(),
            "databases",
            config.chroma_database.as_str(),
            "collections",
        ];
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.inner.http.request(method, url);
        match self.inner.config.effective_auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let started_at = Instant::now();
        let response = request.send().await?;
        let response = Self::check_status(response).await?;

        let url = response.url().clone();
        let bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&bytes)?;

        tracing::trace!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            bytes = bytes.len(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Chroma request completed"
        );

        Ok(decoded)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = api_message(&body);

        tracing::warn!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            status = status.as_u16(),
            message = %message,
            "Chroma request failed"
        );

        Err(Error::api(status.as_u16(), message))
    }
}

/// Extracts `message` (or `error`) from a JSON error body, falling back to the raw body.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_owned))
        })
        .unwrap_or_else(|| body.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChromaClient {
        let Ok(client) = ChromaClient::new(ChromaConfig::default()) else {
            unreachable!("default config is valid")
        };
        client
    }

    #[test]
    fn test_new_does_not_connect() {
        let config = ChromaConfig::new("unreachable.invalid", 1);
        assert!(ChromaClient::new(config).is_ok());
    }

    #[test]
    fn test_collection_endpoints() -> Result<()> {
        let client = client();

        assert_eq!(
            client.collections_endpoint(&[])?.as_str(),
            "http://localhost:8000/api/v2/tenants/default_tenant/databases/default_database/collections"
        );
        assert_eq!(
            client.collections_endpoint(&["abc", "get"])?.as_str(),
            "http://localhost:8000/api/v2/tenants/default_tenant/databases/default_database/collections/abc/get"
        );
        Ok(())
    }

    #[test]
    fn test_names_are_percent_encoded() -> Result<()> {
        let url = client().collections_endpoint(&["my docs/v2"])?;
        assert!(url.as_str().ends_with("/collections/my%20docs%2Fv2"));
        Ok(())
    }

    #[test]
    fn test_api_message_extraction() {
        assert_eq!(
            api_message(r#"{"error":"NotFoundError","message":"Collection [x] does not exists"}"#),
            "Collection [x] does not exists"
        );
        assert_eq!(api_message(r#"{"error":"InvalidArgumentError"}"#), "InvalidArgumentError");
        assert_eq!(api_message("Internal Server Error\n"), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let config = ChromaConfig::new("127.0.0.1", 1);
        let Ok(client) = ChromaClient::new(config) else {
            unreachable!()
        };

        let Err(error) = client.heartbeat().await else {
            unreachable!("nothing listens on port 1")
        };
        let error = vecview_core::Error::from(error);
        assert!(error.is_connectivity());
    }
}
