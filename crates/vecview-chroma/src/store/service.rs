//! Store service wrapper for dependency injection.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use vecview_core::{Result, ServiceHealth};

use super::{CollectionListing, ItemListing, VectorStoreProvider};
use crate::TRACING_TARGET_STORE;
use crate::types::{Collection, QueryBatch};

/// Cloneable handle over any [`VectorStoreProvider`].
#[derive(Clone)]
pub struct VectorStoreService {
    inner: Arc<dyn VectorStoreProvider>,
}

impl fmt::Debug for VectorStoreService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorStoreService").finish_non_exhaustive()
    }
}

impl VectorStoreService {
    /// Create a new store service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: VectorStoreProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Lists collections, mapping an empty database to [`CollectionListing::Empty`].
    pub async fn list_collections(&self) -> Result<CollectionListing> {
        let started_at = Instant::now();
        let collections = self.inner.list_collections().await.inspect_err(|error| {
            tracing::error!(
                target: TRACING_TARGET_STORE,
                error = %error,
                "Listing collections failed"
            );
        })?;

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            count = collections.len(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Listed collections"
        );

        Ok(CollectionListing::from_collections(collections))
    }

    /// Looks up a collection by name.
    pub async fn get_collection(&self, name: &str) -> Result<Collection> {
        self.inner.get_collection(name).await.inspect_err(|error| {
            tracing::warn!(
                target: TRACING_TARGET_STORE,
                collection = %name,
                error = %error,
                "Collection lookup failed"
            );
        })
    }

    /// Fetches a collection's items, mapping zero ids to [`ItemListing::Empty`].
    pub async fn fetch_items(&self, collection: &Collection) -> Result<ItemListing> {
        let started_at = Instant::now();
        let batch = self
            .inner
            .fetch_items(&collection.id)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    target: TRACING_TARGET_STORE,
                    collection = %collection.name,
                    error = %error,
                    "Fetching items failed"
                );
            })?;

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            collection = %collection.name,
            items = batch.len(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Fetched items"
        );

        Ok(ItemListing::from_batch(batch))
    }

    /// Runs a nearest-neighbour query.
    pub async fn query(
        &self,
        collection: &Collection,
        embedding: Vec<f32>,
        n_results: usize,
    ) -> Result<QueryBatch> {
        let started_at = Instant::now();
        let batch = self
            .inner
            .query(&collection.id, embedding, n_results)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET_STORE,
            collection = %collection.name,
            n_results,
            elapsed_ms = started_at.elapsed().as_millis(),
            "Query completed"
        );

        Ok(batch)
    }

    /// Performs a health check on the underlying store.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.inner.health_check().await
    }
}
