//! Similarity search handler.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use vecview_chroma::{SearchInvoker, VectorStoreService};

use super::request::SearchParams;
use super::response::SearchResponse;
use crate::extract::{Path, Query};
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for search operations.
const TRACING_TARGET: &str = "vecview_server::handler::search";

/// Searches a collection for the items nearest to the query text.
///
/// `top_k` is checked before anything else. An empty query answers
/// `{"state":"skipped"}` without contacting the store or the embedder.
#[tracing::instrument(skip_all, fields(collection = %name))]
async fn search_collection(
    State(vector_store): State<VectorStoreService>,
    State(search_invoker): State<SearchInvoker>,
    Path(name): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let top_k = params.validated_top_k()?;

    if params.query.is_empty() {
        tracing::debug!(target: TRACING_TARGET, "Empty query, nothing to search");
        return Ok(Json(SearchResponse::Skipped));
    }

    let collection = vector_store.get_collection(&name).await?;
    let outcome = search_invoker
        .search(&collection, &params.query, top_k)
        .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        collection_id = %collection.id,
        top_k,
        "Search answered"
    );

    Ok(Json(outcome.into()))
}

/// Returns a [`Router`] with the search route.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/collections/{name}/search", get(search_collection))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use vecview_core::embedding::MockEmbedder;

    use super::*;
    use crate::handler::test::{create_test_server_with_mocks, docs_embedder, docs_store};

    #[tokio::test]
    async fn top_one_returns_closest() -> anyhow::Result<()> {
        let server = create_test_server_with_mocks(&docs_store(), &docs_embedder())?;

        let response = server
            .get("/api/collections/docs/search")
            .add_query_param("query", "hello")
            .add_query_param("top_k", 1)
            .await;
        response.assert_status_ok();

        let SearchResponse::Results { results } = response.json::<SearchResponse>() else {
            unreachable!("query is not empty")
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
        assert_eq!(results[0].label, "Result 1 (Distance: 0.0000)");
        Ok(())
    }

    #[tokio::test]
    async fn results_are_bounded_and_ordered() -> anyhow::Result<()> {
        let server = create_test_server_with_mocks(&docs_store(), &MockEmbedder::new(2))?;

        for top_k in 1..=10 {
            let response = server
                .get("/api/collections/docs/search")
                .add_query_param("query", "world")
                .add_query_param("top_k", top_k)
                .await;
            response.assert_status_ok();

            let SearchResponse::Results { results } = response.json::<SearchResponse>() else {
                unreachable!()
            };
            assert!(results.len() <= top_k);
            assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
        }
        Ok(())
    }

    #[tokio::test]
    async fn empty_query_makes_no_remote_calls() -> anyhow::Result<()> {
        let store = docs_store();
        let embedder = docs_embedder();
        let server = create_test_server_with_mocks(&store, &embedder)?;

        let response = server
            .get("/api/collections/docs/search")
            .add_query_param("query", "")
            .await;
        response.assert_status_ok();

        assert_eq!(response.json::<SearchResponse>(), SearchResponse::Skipped);
        assert_eq!(store.calls(), 0);
        assert_eq!(embedder.calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn top_k_out_of_range_is_rejected() -> anyhow::Result<()> {
        let store = docs_store();
        let server = create_test_server_with_mocks(&store, &docs_embedder())?;

        for top_k in [0, 11] {
            let response = server
                .get("/api/collections/docs/search")
                .add_query_param("query", "hello")
                .add_query_param("top_k", top_k)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
        assert_eq!(store.calls(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_top_k_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_mocks(&docs_store(), &docs_embedder())?;

        let response = server
            .get("/api/collections/docs/search")
            .add_query_param("query", "hello")
            .add_query_param("top_k", "many")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_embedder_is_bad_gateway() -> anyhow::Result<()> {
        let embedder = MockEmbedder::new(2).unreachable();
        let server = create_test_server_with_mocks(&docs_store(), &embedder)?;

        let response = server
            .get("/api/collections/docs/search")
            .add_query_param("query", "hello")
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(embedder.calls(), 1);
        Ok(())
    }
}
