//! Vector store abstraction.
//!
//! [`VectorStoreProvider`] is the seam between the dashboard and a concrete
//! store; [`VectorStoreService`] wraps it with logging and turns empty results
//! into explicit listing states.

mod listing;
mod service;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;

pub use listing::{CollectionListing, ItemListing, NO_COLLECTIONS_MESSAGE, NO_ITEMS_MESSAGE};
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockVectorStore;
pub use service::VectorStoreService;
use vecview_core::{Result, ServiceHealth};
use vecview_data::ItemBatch;

use crate::types::{Collection, QueryBatch};

/// Read-only operations the dashboard needs from a vector store.
#[async_trait::async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Lists every collection.
    async fn list_collections(&self) -> Result<Vec<Collection>>;

    /// Looks up a collection by name.
    ///
    /// Fails with [`vecview_core::ErrorKind::NotFound`] for unknown names.
    async fn get_collection(&self, name: &str) -> Result<Collection>;

    /// Fetches all items with documents, metadatas and embeddings.
    async fn fetch_items(&self, collection_id: &str) -> Result<ItemBatch>;

    /// Returns up to `n_results` nearest neighbours of `embedding`, closest first.
    async fn query(
        &self,
        collection_id: &str,
        embedding: Vec<f32>,
        n_results: usize,
    ) -> Result<QueryBatch>;

    /// Performs a health check on the store.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
