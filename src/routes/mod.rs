//! HTTP routes.
//!
//! The router is an explicit value built per server instance; nothing is
//! registered globally. Only the health endpoint is mounted, and every other
//! path gets axum's default empty 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with the health route and request middleware.
pub fn create_router(state: AppState) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, any(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
