//! Collection listing and collection detail handlers.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use vecview_chroma::VectorStoreService;

use super::response::{CollectionDetail, CollectionsResponse};
use crate::extract::Path;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for collection operations.
const TRACING_TARGET: &str = "vecview_server::handler::collections";

/// Lists every collection of the configured tenant and database.
#[tracing::instrument(skip_all)]
async fn list_collections(
    State(vector_store): State<VectorStoreService>,
) -> Result<Json<CollectionsResponse>> {
    let listing = vector_store.list_collections().await?;

    tracing::debug!(
        target: TRACING_TARGET,
        empty = listing.message().is_some(),
        "Collections listed"
    );

    Ok(Json(listing.into()))
}

/// Returns a collection's info, stats and shaped rows.
#[tracing::instrument(skip_all, fields(collection = %name))]
async fn read_collection(
    State(vector_store): State<VectorStoreService>,
    Path(name): Path<String>,
) -> Result<Json<CollectionDetail>> {
    let collection = vector_store.get_collection(&name).await?;
    let listing = vector_store.fetch_items(&collection).await?;
    let detail = CollectionDetail::new(&collection, listing);

    tracing::debug!(
        target: TRACING_TARGET,
        collection_id = %collection.id,
        "Collection read"
    );

    Ok(Json(detail))
}

/// Returns a [`Router`] with all collection routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/collections", get(list_collections))
        .route("/api/collections/{name}", get(read_collection))
}

#[cfg(test)]
mod tests {
    use vecview_chroma::MockVectorStore;
    use vecview_data::EmbeddingDimensions;

    use super::*;
    use crate::handler::response::CollectionItems;
    use crate::handler::test::{create_test_server, create_test_server_with_mocks, docs_embedder};

    #[tokio::test]
    async fn empty_database_reports_no_collections() -> anyhow::Result<()> {
        let server = create_test_server_with_mocks(&MockVectorStore::new(), &docs_embedder())?;

        let response = server.get("/api/collections").await;
        response.assert_status_ok();

        let body = response.json::<CollectionsResponse>();
        assert_eq!(
            body,
            CollectionsResponse::Empty {
                message: "No collections found in ChromaDB".into()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn lists_docs_collection() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api/collections").await;
        response.assert_status_ok();

        let CollectionsResponse::Ready { collections } = response.json::<CollectionsResponse>() else {
            unreachable!("docs collection is present")
        };
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].name, "docs");
        Ok(())
    }

    #[tokio::test]
    async fn docs_rows_are_shaped() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/api/collections/docs").await;
        response.assert_status_ok();

        let detail = response.json::<CollectionDetail>();
        assert_eq!(
            detail.info.get("id").and_then(|id| id.as_str()),
            Some("c1")
        );

        let CollectionItems::Ready { stats, rows } = detail.items else {
            unreachable!("docs collection has items")
        };
        assert_eq!(stats.total_items, 2);
        assert_eq!(
            stats.embedding_dimensions,
            EmbeddingDimensions::Uniform { dimensions: 2 }
        );
        assert_eq!(rows[0].id, "a");
        assert_eq!(rows[0].metadata.as_deref(), Some("{'k': 1}"));
        assert_eq!(rows[1].id, "b");
        assert_eq!(rows[1].metadata.as_deref(), Some("None"));
        assert!(rows.iter().all(|row| row.embedding_length == 2));
        Ok(())
    }

    #[tokio::test]
    async fn empty_collection_reports_no_items() -> anyhow::Result<()> {
        let store = MockVectorStore::new().with_collection(
            vecview_chroma::Collection::new("c2", "empty"),
            vecview_data::ItemBatch::default(),
        );
        let server = create_test_server_with_mocks(&store, &docs_embedder())?;

        let response = server.get("/api/collections/empty").await;
        response.assert_status_ok();

        let detail = response.json::<CollectionDetail>();
        assert_eq!(
            detail.items,
            CollectionItems::Empty {
                message: "No items found in this collection".into()
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let response = server.get("/api/collections/missing").await;
        response.assert_status_not_found();
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_store_is_bad_gateway() -> anyhow::Result<()> {
        let store = MockVectorStore::new().unreachable();
        let server = create_test_server_with_mocks(&store, &docs_embedder())?;

        let response = server.get("/api/collections").await;
        response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
        Ok(())
    }
}
