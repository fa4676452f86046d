// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker pool size. Bounds how many connections are handled in
    /// parallel; excess accepted connections queue for a free worker.
    pub workers: usize,
}

/// Routing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RoutingConfig {
    /// Path prefix that routes a request to the dispatcher instead of
    /// the static-file responder.
    pub dynamic_prefix: String,
    /// Directory that static files are served from.
    pub document_root: String,
    /// Files tried in order when a directory is requested.
    pub index_files: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (common, or a custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Seconds allowed for reading the request line and headers.
    pub read_timeout: u64,
    /// Seconds allowed for writing the response.
    pub write_timeout: u64,
}
