//! Shared application state for request handlers.

use crate::health::HealthReporter;

/// Per-router application state.
///
/// Each router gets its own state, so separate server instances never share
/// anything.
#[derive(Clone, Copy, Default)]
pub struct AppState {
    pub reporter: HealthReporter,
}

impl AppState {
    /// Creates a new application state around the given reporter.
    pub fn new(reporter: HealthReporter) -> Self {
        Self { reporter }
    }
}
