//! Request types for HTTP handlers.

mod search;

pub use search::{DEFAULT_TOP_K, MAX_TOP_K, MIN_TOP_K, SearchParams};
