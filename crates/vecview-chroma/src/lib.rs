#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for HTTP client operations.
pub const TRACING_TARGET_CLIENT: &str = "vecview_chroma::client";

/// Tracing target for store service operations.
pub const TRACING_TARGET_STORE: &str = "vecview_chroma::store";

/// Tracing target for similarity search.
pub const TRACING_TARGET_SEARCH: &str = "vecview_chroma::search";

mod client;
mod error;
mod search;
mod store;
mod types;

pub use crate::client::{ChromaClient, ChromaConfig};
pub use crate::error::{Error, Result};
pub use crate::search::{SearchHit, SearchInvoker, SearchOutcome};
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use crate::store::MockVectorStore;
pub use crate::store::{
    CollectionListing, ItemListing, NO_COLLECTIONS_MESSAGE, NO_ITEMS_MESSAGE, VectorStoreProvider,
    VectorStoreService,
};
pub use crate::types::{Collection, IncludeField, QueryBatch};
