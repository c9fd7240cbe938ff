//! Application state and dependency injection.

use vecview_chroma::{SearchInvoker, VectorStoreService};
use vecview_core::embedding::EmbeddingService;

/// Application state.
///
/// Built once at startup from the store handle and the embedder, then
/// cloned into every request. Used for the [`State`] extraction
/// (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    vector_store: VectorStoreService,
    embedding_service: EmbeddingService,
    search_invoker: SearchInvoker,
}

impl ServiceState {
    /// Wires the store and the embedder into a search invoker.
    pub fn new(vector_store: VectorStoreService, embedding_service: EmbeddingService) -> Self {
        let search_invoker = SearchInvoker::new(vector_store.clone(), embedding_service.clone());

        Self {
            vector_store,
            embedding_service,
            search_invoker,
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(vector_store: VectorStoreService);
impl_di!(embedding_service: EmbeddingService);
impl_di!(search_invoker: SearchInvoker);
