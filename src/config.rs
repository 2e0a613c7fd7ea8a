//! Configuration loading and constants.
//!
//! The service runs without any configuration file: every setting has a
//! default that binds `0.0.0.0:8080`. An optional TOML file can override the
//! listen address, the graceful shutdown window and the log format.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

// =============================================================================
// HTTP Listener Defaults
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Human-readable default listen address, used in CLI help and logs
pub const DEFAULT_BIND_ADDR: &str = formatcp!("{}:{}", DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT);

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Health Endpoint
// =============================================================================

/// Path the health reporter is mounted at
pub const HEALTH_PATH: &str = "/health";

/// Probe answers must never be served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Response header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "health_reporter=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections on SIGTERM/SIGINT (default: 30)
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }

    /// Resolve host and port into a socket address.
    ///
    /// Only literal IP addresses are accepted; hostnames are rejected so the
    /// bind target never depends on DNS.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "http.host must be an IP address, got '{}'",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.socket_addr()?;

        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
