#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use vecview_chroma::{ChromaClient, VectorStoreService};
use vecview_core::embedding::EmbeddingService;
use vecview_ollama::OllamaClient;
use vecview_server::handler::routes;
use vecview_server::middleware::{RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt};
use vecview_server::service::ServiceState;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "vecview_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "vecview_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "vecview_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    Cli::init_tracing();
    cli.validate()?;
    cli.log();

    let state = create_service_state(&cli)?;
    let router = create_router(state, &cli.recovery);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Builds the Chroma and Ollama clients once and wires them into the state.
///
/// No connection is attempted here; unreachable services surface on the
/// first request.
fn create_service_state(cli: &Cli) -> anyhow::Result<ServiceState> {
    let chroma = ChromaClient::new(cli.chroma.clone()).context("failed to create Chroma client")?;
    let ollama = OllamaClient::new(cli.ollama.clone()).context("failed to create Ollama client")?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        embedding_model = %ollama.embedding_model(),
        "clients created"
    );

    Ok(ServiceState::new(
        VectorStoreService::new(chroma),
        EmbeddingService::new(ollama),
    ))
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs, tracing spans and timing
/// 3. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, recovery: &RecoveryConfig) -> Router {
    routes()
        .with_state(state)
        .with_metrics()
        .with_observability()
        .with_recovery(recovery)
}
