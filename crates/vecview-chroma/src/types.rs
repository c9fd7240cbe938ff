//! Wire types for the Chroma v2 REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vecview_data::Metadata;

/// A named collection as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Opaque identifier used in item and query endpoints.
    pub id: String,
    /// Human-readable, unique name.
    pub name: String,
    /// Free-form metadata attached at creation.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// Declared embedding dimensionality, once the collection has data.
    #[serde(default)]
    pub dimension: Option<usize>,
    #[serde(default)]
    pub tenant: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl Collection {
    /// Creates a collection with no metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metadata: None,
            dimension: None,
            tenant: None,
            database: None,
        }
    }

    /// Sets the metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns the info object shown for a selected collection.
    ///
    /// Starts from `id` and `name` and merges the metadata on top, so metadata
    /// keys named `id` or `name` win.
    pub fn info(&self) -> Metadata {
        let mut info = Metadata::new();
        info.insert("id".to_owned(), Value::String(self.id.clone()));
        info.insert("name".to_owned(), Value::String(self.name.clone()));
        if let Some(metadata) = &self.metadata {
            for (key, value) in metadata {
                info.insert(key.clone(), value.clone());
            }
        }
        info
    }
}

/// Fields that can be requested from the get and query endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeField {
    Documents,
    Metadatas,
    Embeddings,
    Distances,
}

/// Body of `POST .../collections/{id}/get`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GetRequest {
    pub include: Vec<IncludeField>,
}

impl GetRequest {
    /// Requests every column the dashboard displays.
    pub fn all_columns() -> Self {
        Self {
            include: vec![
                IncludeField::Documents,
                IncludeField::Metadatas,
                IncludeField::Embeddings,
            ],
        }
    }
}

/// Body of `POST .../collections/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QueryRequest {
    pub query_embeddings: Vec<Vec<f32>>,
    pub n_results: usize,
    pub include: Vec<IncludeField>,
}

impl QueryRequest {
    pub fn single(embedding: Vec<f32>, n_results: usize) -> Self {
        Self {
            query_embeddings: vec![embedding],
            n_results,
            include: vec![
                IncludeField::Documents,
                IncludeField::Metadatas,
                IncludeField::Distances,
            ],
        }
    }
}

/// Response of a nearest-neighbour query.
///
/// Every column is nested one level per query embedding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryBatch {
    #[serde(default)]
    pub ids: Vec<Vec<String>>,
    #[serde(default)]
    pub documents: Option<Vec<Vec<Option<String>>>>,
    #[serde(default)]
    pub metadatas: Option<Vec<Vec<Option<Metadata>>>>,
    #[serde(default)]
    pub distances: Option<Vec<Vec<Option<f32>>>>,
}

/// Body of `GET /api/v2/heartbeat`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Heartbeat {
    #[serde(rename = "nanosecond heartbeat")]
    pub nanosecond_heartbeat: u64,
}
