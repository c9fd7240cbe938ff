#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for embedding operations.
pub const TRACING_TARGET_EMBEDDING: &str = "vecview_core::embedding";

mod error;
mod health;

pub mod embedding;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use health::{ServiceHealth, ServiceStatus};
