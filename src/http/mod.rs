//! HTTP server module.
//!
//! Binds the listener, serves the router and drains in-flight requests on
//! SIGTERM/SIGINT. Binding is split from serving so that a port conflict
//! surfaces as a typed startup error and tests can serve on an ephemeral port.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
