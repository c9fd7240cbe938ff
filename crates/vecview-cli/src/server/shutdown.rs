//! Shutdown signals and the graceful-shutdown deadline.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tokio::sync::Notify;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// The signal that ended the serve loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => f.write_str("SIGINT"),
            Self::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Waits for SIGINT, or SIGTERM on unix.
///
/// A handler that cannot be installed never fires; the other one still does.
pub async fn wait_for_signal() -> ShutdownSignal {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => ShutdownSignal::Interrupt,
            Err(err) => {
                tracing::error!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %err,
                    "Failed to install Ctrl+C handler"
                );
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                ShutdownSignal::Terminate
            }
            Err(err) => {
                tracing::error!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %err,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<ShutdownSignal>();

    tokio::select! {
        signal = interrupt => signal,
        signal = terminate => signal,
    }
}

/// Connects the graceful-shutdown future with a drain deadline.
#[derive(Debug, Clone)]
pub struct Shutdown {
    started: Arc<Notify>,
    timeout: Duration,
}

impl Shutdown {
    pub fn new(timeout: Duration) -> Self {
        Self {
            started: Arc::new(Notify::new()),
            timeout,
        }
    }

    /// Resolves once a signal arrives; passed to `with_graceful_shutdown`.
    pub async fn signal(self) {
        let signal = wait_for_signal().await;

        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            %signal,
            timeout_secs = self.timeout.as_secs(),
            "Graceful shutdown initiated"
        );

        self.started.notify_one();
    }

    /// Resolves `timeout` after the shutdown started.
    pub async fn deadline(self) {
        self.started.notified().await;
        tokio::time::sleep(self.timeout).await;

        tracing::warn!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            timeout_secs = self.timeout.as_secs(),
            "In-flight requests did not finish in time"
        );
    }

    #[cfg(test)]
    fn trigger(&self) {
        self.started.notify_one();
    }
}
