//! Health status model and the reporter that produces it.
//!
//! A `HealthReport` is created fresh for every probe and serializes to
//! `{"status":"<value>"}` followed by a newline. The reporter holds no state
//! and performs no I/O, so every call yields the same report.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type of every health response body
pub const HEALTH_CONTENT_TYPE: &str = "application/json";

/// Liveness state reported to probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Degraded,
}

impl HealthStatus {
    /// HTTP status code a probe receives for this state.
    ///
    /// A degraded service still serves traffic, so only `Unhealthy` maps to
    /// a non-2xx code.
    pub fn status_code(self) -> StatusCode {
        match self {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// The `{"status": ...}` payload returned by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
}

impl HealthReport {
    pub fn new(status: HealthStatus) -> Self {
        Self { status }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }

    /// Render the newline-terminated JSON body.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        let mut body = serde_json::to_string(self)?;
        body.push('\n');
        Ok(body)
    }
}

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        match self.to_body() {
            Ok(body) => (
                self.status_code(),
                [(CONTENT_TYPE, HeaderValue::from_static(HEALTH_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize health report");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Answers liveness queries.
///
/// Stateless: it consults nothing, so it is always healthy while the process
/// can serve HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthReporter;

impl HealthReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self) -> HealthReport {
        HealthReport::new(HealthStatus::Healthy)
    }
}
