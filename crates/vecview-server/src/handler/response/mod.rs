//! Response types for HTTP handlers.

mod collections;
mod error_response;
mod monitors;
mod search;

pub use collections::{CollectionDetail, CollectionItems, CollectionsResponse};
pub use error_response::ErrorResponse;
pub use monitors::MonitorStatusResponse;
pub use search::{SearchResponse, SearchResult};
