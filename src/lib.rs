//! health-reporter: a minimal HTTP liveness endpoint.
//!
//! Serves `{"status":"healthy"}` at `/health` for load balancers and
//! orchestrators. The library exposes the router and server pieces so that
//! each test can run an isolated instance.

pub mod config;
pub mod health;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use health::{HealthReport, HealthReporter, HealthStatus};
pub use routes::create_router;
pub use state::AppState;
