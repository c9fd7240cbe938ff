//! Middleware for `axum::Router`: request tracing and error recovery.

mod observability;
mod recovery;

pub use observability::{RouterObservabilityExt, track_request_timing};
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
