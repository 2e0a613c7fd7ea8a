//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::extract::State;

use crate::health::HealthReport;
use crate::state::AppState;

/// Health check handler.
///
/// Mounted for every method, so `GET` and `POST` receive the same answer.
pub async fn health(State(state): State<AppState>) -> HealthReport {
    state.reporter.report()
}
