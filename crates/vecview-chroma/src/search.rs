//! Similarity search over a collection.
//!
//! The query text is embedded first, then sent as a single query embedding.
//! Hits are returned exactly in the order the store ranked them.

use serde::{Deserialize, Serialize};
use vecview_core::embedding::EmbeddingService;
use vecview_core::{Error, Result};
use vecview_data::Metadata;

use crate::TRACING_TARGET_SEARCH;
use crate::store::VectorStoreService;
use crate::types::{Collection, QueryBatch};

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Zero-based position in the service's ranking.
    pub rank: usize,
    pub id: String,
    pub document: Option<String>,
    pub metadata: Option<Metadata>,
    /// Distance to the query; smaller is more similar.
    pub distance: f32,
}

impl SearchHit {
    /// Heading shown above the hit, e.g. `Result 1 (Distance: 0.1234)`.
    pub fn label(&self) -> String {
        format!("Result {} (Distance: {:.4})", self.rank + 1, self.distance)
    }
}

/// Outcome of a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The query text was empty; nothing was sent anywhere.
    EmptyQuery,
    /// Hits ordered by ascending distance, at most `top_k` of them.
    Results(Vec<SearchHit>),
}

/// Runs nearest-neighbour searches against the store.
#[derive(Debug, Clone)]
pub struct SearchInvoker {
    store: VectorStoreService,
    embedder: EmbeddingService,
}

impl SearchInvoker {
    pub fn new(store: VectorStoreService, embedder: EmbeddingService) -> Self {
        Self { store, embedder }
    }

    /// Searches `collection` for the `top_k` items nearest to `query_text`.
    ///
    /// An empty query returns [`SearchOutcome::EmptyQuery`] without calling
    /// the embedder or the store. `top_k` is passed through unchecked.
    pub async fn search(
        &self,
        collection: &Collection,
        query_text: &str,
        top_k: usize,
    ) -> Result<SearchOutcome> {
        if query_text.is_empty() {
            tracing::debug!(
                target: TRACING_TARGET_SEARCH,
                collection = %collection.name,
                "Empty query, search skipped"
            );
            return Ok(SearchOutcome::EmptyQuery);
        }

        let embedding = self.embedder.embed_text(query_text).await?.embedding;
        let batch = self.store.query(collection, embedding, top_k).await?;
        let hits = hits_from_batch(batch, top_k)?;

        tracing::info!(
            target: TRACING_TARGET_SEARCH,
            collection = %collection.name,
            top_k,
            hits = hits.len(),
            "Search completed"
        );

        Ok(SearchOutcome::Results(hits))
    }
}

/// Zips the first query row of a response into ranked hits.
fn hits_from_batch(batch: QueryBatch, top_k: usize) -> Result<Vec<SearchHit>> {
    let QueryBatch {
        ids,
        documents,
        metadatas,
        distances,
    } = batch;

    let Some(ids) = ids.into_iter().next() else {
        return Ok(Vec::new());
    };
    let distances = distances
        .and_then(|rows| rows.into_iter().next())
        .ok_or_else(|| Error::serialization().with_message("query response has no distances"))?;
    let mut documents = documents
        .and_then(|rows| rows.into_iter().next())
        .unwrap_or_default()
        .into_iter();
    let mut metadatas = metadatas
        .and_then(|rows| rows.into_iter().next())
        .unwrap_or_default()
        .into_iter();

    ids.into_iter()
        .zip(distances)
        .take(top_k)
        .enumerate()
        .map(|(rank, (id, distance))| {
            let distance = distance.ok_or_else(|| {
                Error::serialization().with_message(format!("query hit '{id}' has no distance"))
            })?;
            Ok(SearchHit {
                rank,
                id,
                document: documents.next().flatten(),
                metadata: metadatas.next().flatten(),
                distance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use vecview_core::ErrorKind;
    use vecview_core::embedding::MockEmbedder;
    use vecview_data::ItemBatch;

    use super::*;
    use crate::store::MockVectorStore;

    fn docs() -> (Collection, MockVectorStore, MockEmbedder) {
        let collection = Collection::new("c1", "docs");
        let items = ItemBatch::new(["a", "b"])
            .with_documents([Some("hello"), Some("world")])
            .with_embeddings([Some(vec![0.1, 0.2]), Some(vec![0.3, 0.4])]);
        let store = MockVectorStore::new().with_collection(collection.clone(), items);
        let embedder = MockEmbedder::new(2).with_vector("hello", vec![0.1, 0.2]);
        (collection, store, embedder)
    }

    #[tokio::test]
    async fn empty_query_makes_no_calls() -> Result<()> {
        let (collection, store, embedder) = docs();
        let invoker = SearchInvoker::new(store.to_service(), embedder.to_service());

        let outcome = invoker.search(&collection, "", 3).await?;

        assert_eq!(outcome, SearchOutcome::EmptyQuery);
        assert_eq!(store.calls(), 0);
        assert_eq!(embedder.calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn top_one_returns_closest_item() -> Result<()> {
        let (collection, store, embedder) = docs();
        let invoker = SearchInvoker::new(store.to_service(), embedder.to_service());

        let SearchOutcome::Results(hits) = invoker.search(&collection, "hello", 1).await? else {
            unreachable!("query is not empty")
        };

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[0].rank, 0);
        assert_eq!(hits[0].document.as_deref(), Some("hello"));
        assert_eq!(hits[0].label(), "Result 1 (Distance: 0.0000)");
        Ok(())
    }

    #[tokio::test]
    async fn results_are_bounded_and_ordered() -> Result<()> {
        let (collection, store, embedder) = docs();
        let invoker = SearchInvoker::new(store.to_service(), embedder.to_service());

        for top_k in 1..=10 {
            let SearchOutcome::Results(hits) = invoker.search(&collection, "world", top_k).await?
            else {
                unreachable!()
            };
            assert!(hits.len() <= top_k);
            assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
        Ok(())
    }

    #[test]
    fn keeps_service_order() -> Result<()> {
        let batch = QueryBatch {
            ids: vec![vec!["x".into(), "y".into()]],
            documents: None,
            metadatas: None,
            distances: Some(vec![vec![Some(0.9), Some(0.1)]]),
        };

        let hits = hits_from_batch(batch, 5)?;
        assert_eq!(hits[0].id, "x");
        assert_eq!(hits[1].id, "y");
        assert_eq!(hits[1].document, None);
        Ok(())
    }

    #[test]
    fn missing_distances_is_an_error() {
        let batch = QueryBatch {
            ids: vec![vec!["x".into()]],
            ..QueryBatch::default()
        };

        let result = hits_from_batch(batch, 1);
        assert!(matches!(result, Err(e) if e.kind() == ErrorKind::Serialization));
    }

    #[test]
    fn empty_response_has_no_hits() -> Result<()> {
        assert!(hits_from_batch(QueryBatch::default(), 3)?.is_empty());
        Ok(())
    }
}
