//! Plain HTTP listener.

use std::future::IntoFuture;
use std::io;

use axum::Router;
use tokio::net::TcpListener;

use super::lifecycle::serve_with_shutdown;
use super::shutdown::Shutdown;
use super::{ServerError, ServerResult};
use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;

/// Binds the configured address and serves `app` with graceful shutdown.
///
/// After a signal, in-flight requests get `shutdown_timeout` to finish;
/// past that the server is dropped and an error is returned.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> ServerResult<()> {
    server_config
        .validate()
        .map_err(|err| ServerError::InvalidConfig(err.to_string()))?;

    let server_addr = server_config.server_addr();

    let listener = TcpListener::bind(server_addr).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %server_addr,
            error = %err,
            "Failed to bind to address"
        );

        ServerError::BindError {
            address: server_addr.to_string(),
            source: err,
        }
    })?;

    let shutdown = Shutdown::new(server_config.shutdown_timeout());
    serve_with_shutdown(&server_config, || async move {
        let server = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().signal())
            .into_future();

        tokio::select! {
            result = server => result,
            () = shutdown.deadline() => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "graceful shutdown timed out",
            )),
        }
    })
    .await
}
