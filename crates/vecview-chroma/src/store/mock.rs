//! Mock vector store for testing.
//!
//! Holds collections in memory and answers queries with a brute-force
//! squared-L2 scan, the default distance of a Chroma collection. Every call
//! is counted so tests can assert that a code path never reached the store.
//!
//! ```toml
//! [dev-dependencies]
//! vecview-chroma = { version = "...", features = ["test-utils"] }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use vecview_core::{Error, Result, ServiceHealth};
use vecview_data::ItemBatch;

use super::{VectorStoreProvider, VectorStoreService};
use crate::types::{Collection, QueryBatch};

/// In-memory [`VectorStoreProvider`] for tests.
#[derive(Debug, Clone, Default)]
pub struct MockVectorStore {
    collections: Vec<(Collection, ItemBatch)>,
    unreachable: bool,
    calls: Arc<AtomicUsize>,
}

impl MockVectorStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection with its items.
    pub fn with_collection(mut self, collection: Collection, items: ItemBatch) -> Self {
        self.collections.push((collection, items));
        self
    }

    /// Makes every call fail with a network error.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Returns how many store calls were made so far, shared between clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wraps a clone of this mock into a [`VectorStoreService`].
    pub fn to_service(&self) -> VectorStoreService {
        VectorStoreService::new(self.clone())
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(Error::network_error().with_message("Could not connect to Chroma"));
        }
        Ok(())
    }

    fn items(&self, collection_id: &str) -> Result<&ItemBatch> {
        self.collections
            .iter()
            .find(|(collection, _)| collection.id == collection_id)
            .map(|(_, items)| items)
            .ok_or_else(|| {
                Error::not_found().with_message(format!("Collection {collection_id} does not exist"))
            })
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[async_trait::async_trait]
impl VectorStoreProvider for MockVectorStore {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.enter()?;
        Ok(self.collections.iter().map(|(c, _)| c.clone()).collect())
    }

    async fn get_collection(&self, name: &str) -> Result<Collection> {
        self.enter()?;
        self.collections
            .iter()
            .find(|(collection, _)| collection.name == name)
            .map(|(collection, _)| collection.clone())
            .ok_or_else(|| Error::not_found().with_message(format!("Collection {name} does not exist")))
    }

    async fn fetch_items(&self, collection_id: &str) -> Result<ItemBatch> {
        self.enter()?;
        self.items(collection_id).cloned()
    }

    async fn query(
        &self,
        collection_id: &str,
        embedding: Vec<f32>,
        n_results: usize,
    ) -> Result<QueryBatch> {
        self.enter()?;
        let items = self.items(collection_id)?;

        let mut scored: Vec<(usize, f32)> = (0..items.len())
            .filter_map(|i| items.embedding(i).map(|e| (i, squared_l2(&embedding, e))))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(n_results);

        Ok(QueryBatch {
            ids: vec![scored.iter().map(|(i, _)| items.ids[*i].clone()).collect()],
            documents: Some(vec![
                scored
                    .iter()
                    .map(|(i, _)| items.document(*i).map(str::to_owned))
                    .collect(),
            ]),
            metadatas: Some(vec![
                scored
                    .iter()
                    .map(|(i, _)| items.metadata(*i).cloned())
                    .collect(),
            ]),
            distances: Some(vec![scored.iter().map(|(_, d)| Some(*d)).collect()]),
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        self.enter().map_or_else(
            |error| Ok(ServiceHealth::unhealthy(error.to_string())),
            |()| Ok(ServiceHealth::healthy()),
        )
    }
}

#[cfg(test)]
mod tests {
    use vecview_core::ErrorKind;

    use super::*;

    fn store() -> MockVectorStore {
        let items = ItemBatch::new(["a", "b", "c"])
            .with_documents([Some("one"), Some("two"), None])
            .with_embeddings([Some(vec![0.0, 0.0]), Some(vec![1.0, 0.0]), Some(vec![3.0, 4.0])]);
        MockVectorStore::new().with_collection(Collection::new("c1", "docs"), items)
    }

    #[tokio::test]
    async fn query_orders_by_distance() -> Result<()> {
        let batch = store().query("c1", vec![2.9, 4.0], 2).await?;

        assert_eq!(batch.ids, vec![vec!["c".to_string(), "b".to_string()]]);
        let Some(distances) = batch.distances else {
            unreachable!()
        };
        assert!(distances[0][0] <= distances[0][1]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let result = store().get_collection("missing").await;
        assert!(matches!(result, Err(e) if e.kind() == ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn unreachable_store_counts_calls() {
        let store = store().unreachable();
        let result = store.list_collections().await;

        assert!(matches!(result, Err(e) if e.is_connectivity()));
        assert_eq!(store.calls(), 1);
    }
}
