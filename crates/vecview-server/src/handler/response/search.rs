use serde::{Deserialize, Serialize};
use vecview_chroma::{SearchHit, SearchOutcome};
use vecview_data::Metadata;

/// One hit as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub rank: usize,
    /// Heading such as `Result 1 (Distance: 0.1234)`.
    pub label: String,
    pub id: String,
    pub document: Option<String>,
    pub metadata: Option<Metadata>,
    pub distance: f32,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            label: hit.label(),
            rank: hit.rank,
            id: hit.id,
            document: hit.document,
            metadata: hit.metadata,
            distance: hit.distance,
        }
    }
}

/// Body of `GET /api/collections/{name}/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchResponse {
    /// No query text was given, nothing was searched.
    Skipped,
    /// Hits in the order the store ranked them.
    Results { results: Vec<SearchResult> },
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::EmptyQuery => Self::Skipped,
            SearchOutcome::Results(hits) => Self::Results {
                results: hits.into_iter().map(SearchResult::from).collect(),
            },
        }
    }
}
