#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for handler errors.
pub const TRACING_TARGET_HANDLER: &str = "vecview_server::handler";

/// Tracing target for request extraction.
pub const TRACING_TARGET_EXTRACT: &str = "vecview_server::extract";

/// Tracing target for request timing.
pub const TRACING_TARGET_METRICS: &str = "vecview_server::metrics";

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;
