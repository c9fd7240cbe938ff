//! Request extractors with JSON error rejections.

mod enhanced_path;
mod enhanced_query;

pub use enhanced_path::Path;
pub use enhanced_query::Query;
