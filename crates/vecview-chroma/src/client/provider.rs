//! [`VectorStoreProvider`] implementation for [`ChromaClient`].

use std::time::Instant;

use vecview_core::{Result, ServiceHealth};
use vecview_data::ItemBatch;

use super::ChromaClient;
use crate::TRACING_TARGET_CLIENT;
use crate::store::VectorStoreProvider;
use crate::types::{Collection, QueryBatch};

#[async_trait::async_trait]
impl VectorStoreProvider for ChromaClient {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        Ok(ChromaClient::list_collections(self).await?)
    }

    async fn get_collection(&self, name: &str) -> Result<Collection> {
        Ok(ChromaClient::get_collection(self, name).await?)
    }

    async fn fetch_items(&self, collection_id: &str) -> Result<ItemBatch> {
        Ok(self.get_items(collection_id).await?)
    }

    async fn query(
        &self,
        collection_id: &str,
        embedding: Vec<f32>,
        n_results: usize,
    ) -> Result<QueryBatch> {
        Ok(self.query_items(collection_id, embedding, n_results).await?)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        let started_at = Instant::now();

        match self.heartbeat().await {
            Ok(nanos) => {
                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    heartbeat = nanos,
                    "Chroma heartbeat received"
                );
                Ok(ServiceHealth::healthy().with_response_time(started_at.elapsed()))
            }
            Err(error) => {
                let error = vecview_core::Error::from(error);
                Ok(ServiceHealth::unhealthy(error.to_string())
                    .with_response_time(started_at.elapsed()))
            }
        }
    }
}
