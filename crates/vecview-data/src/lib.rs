#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for data shaping and export.
pub const TRACING_TARGET: &str = "vecview_data";

mod error;
mod item;
mod repr;
mod row;
mod stats;

pub mod export;

pub use crate::error::{DataError, DataResult};
pub use crate::item::{ItemBatch, Metadata};
pub use crate::repr::{display_metadata, display_value};
pub use crate::row::{Row, shape_rows};
pub use crate::stats::{CollectionStats, EmbeddingDimensions};
