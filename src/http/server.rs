//! HTTP server startup logic.

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Bind a TCP listener on `addr`.
///
/// The listener is switched to non-blocking mode so it can be handed to the
/// async server.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
    listener
        .set_nonblocking(true)
        .map_err(|source| ServerError::Bind { addr, source })?;
    Ok(listener)
}

/// Serve `app` on an already-bound listener until `handle` is shut down.
pub async fn serve(listener: TcpListener, app: Router, handle: Handle) -> Result<(), ServerError> {
    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let listener = bind(addr)?;

    tracing::info!(%addr, "Starting HTTP server");

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    serve(listener, app, handle).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
