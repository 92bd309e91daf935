//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the fixed
//! response bodies, HTTP cache policy, logging defaults and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Demo Responses
// =============================================================================

/// Body returned by `GET /demo/data`.
pub const DEMO_DATA_MESSAGE: &str = "This is my  AWS Certified DevOps Engineer - Professional Exam Project in Edureka! and this application deployed in AWS ECS";

/// Body returned by `GET /demo/message`.
pub const DEMO_MESSAGE: &str = "Second message from AWS ECS";

/// Body returned by `GET /health`.
pub const HEALTH_OK: &str = "ok";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Demo responses - never cached, each request must reach the running task
pub const HTTP_CACHE_DEMO_MAX_AGE: u32 = 0;

pub const CACHE_CONTROL_DEMO: &str = formatcp!("no-store, max-age={}", HTTP_CACHE_DEMO_MAX_AGE);

/// Header used to echo the per-request ID back to the client
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Server Lifecycle
// =============================================================================

/// ECS default `stopTimeout`: seconds between SIGTERM and SIGKILL
pub const ECS_STOP_TIMEOUT_SECS: u64 = 30;

/// Seconds to drain in-flight requests after SIGTERM/SIGINT.
/// Must end before ECS sends SIGKILL.
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 25;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "ecs_demo=debug,tower_http=info";

/// Default bind host (all interfaces, as required inside a container)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    /// Resolve `host:port` into the address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event (CloudWatch friendly)
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Fail at startup rather than at bind time
        config.http.socket_addr()?;

        Ok(config)
    }

    /// Load an explicit config file, or fall back to the default path when it
    /// exists, or to built-in defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
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
