//! CSV export handler.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use axum_extra::response::Attachment;
use vecview_chroma::{ItemListing, VectorStoreService};
use vecview_data::export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, to_delimited_text};
use vecview_data::shape_rows;

use crate::extract::Path;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for export operations.
const TRACING_TARGET: &str = "vecview_server::handler::export";

/// Downloads every item of a collection as `chromadb_export.csv`.
///
/// A collection without items exports the header line only.
#[tracing::instrument(skip_all, fields(collection = %name))]
async fn export_collection(
    State(vector_store): State<VectorStoreService>,
    Path(name): Path<String>,
) -> Result<Attachment<Vec<u8>>> {
    let collection = vector_store.get_collection(&name).await?;
    let rows = match vector_store.fetch_items(&collection).await? {
        ItemListing::Empty => Vec::new(),
        ItemListing::Ready(batch) => shape_rows(&batch),
    };

    let bytes = to_delimited_text(&rows)?;

    tracing::info!(
        target: TRACING_TARGET,
        collection_id = %collection.id,
        rows = rows.len(),
        bytes = bytes.len(),
        "Collection exported"
    );

    Ok(Attachment::new(bytes)
        .filename(EXPORT_FILE_NAME)
        .content_type(EXPORT_CONTENT_TYPE))
}

/// Returns a [`Router`] with the export route.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/collections/{name}/export", get(export_collection))
}
