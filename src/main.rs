//! health-reporter: an HTTP liveness endpoint.
//!
//! This is the application entry point. It initializes tracing, loads the
//! optional TOML configuration, builds the router and starts the HTTP server.
//! Fatal startup errors (bad config, port in use) are logged and the process
//! exits non-zero.

use std::process::ExitCode;

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use health_reporter::config::{
    AppConfig, LoggingConfig, DEFAULT_BIND_ADDR, DEFAULT_LOG_FILTER, HEALTH_PATH,
};
use health_reporter::http::start_server;
use health_reporter::{create_router, AppState, HealthReporter};

const CONFIG_HELP: &str = formatcp!(
    "Path to an optional configuration file (without one, listens on {})",
    DEFAULT_BIND_ADDR
);

/// health-reporter: answers liveness probes on /health
#[derive(Parser, Debug)]
#[command(name = "health-reporter", version, about)]
struct Args {
    #[arg(short, long, help = CONFIG_HELP)]
    config: Option<String>,

    /// Log level filter (e.g., "health_reporter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Config is needed before tracing to pick the log format, so a load
    // failure is reported with the default subscriber.
    let config = AppConfig::load_or_default(args.config.as_deref());
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_tracing(args.log_level, &logging);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, path = ?args.config, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        source = args.config.as_deref().unwrap_or("defaults"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let state = AppState::new(HealthReporter::new());
    let app = create_router(state);
    tracing::info!(path = HEALTH_PATH, "Health endpoint registered");

    match start_server(app, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "HTTP server failed");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with filter priority: CLI > RUST_LOG > default.
fn init_tracing(cli_filter: Option<String>, logging: &LoggingConfig) {
    let log_filter = cli_filter
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
