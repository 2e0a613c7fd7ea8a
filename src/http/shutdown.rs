//! Graceful shutdown and signal handling.
//!
//! SIGTERM/SIGINT trigger a graceful shutdown with connection draining.

use std::time::Duration;

use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait up to `grace` for existing connections to complete
/// 3. Shutdown
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        shutdown_signal().await;

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_secs = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

/// Resolves once Ctrl+C or SIGTERM is received.
///
/// If a signal listener cannot be installed it is logged and that branch
/// never fires; the other signal still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
