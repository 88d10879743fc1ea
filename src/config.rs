//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gateway server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built `sense-ui` assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> String {
    "sense-ui/dist".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl GatewayConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Record backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the record backend
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    /// Full URL of the backend records endpoint
    pub fn records_url(&self) -> String {
        format!("{}/records", self.base_url.trim_end_matches('/'))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sense-market").join("config.toml")),
            Some(PathBuf::from("/etc/sense-market/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Gateway overrides
        if let Ok(host) = std::env::var("SENSE_GATEWAY_HOST") {
            self.gateway.host = host;
        }
        if let Ok(port) = std::env::var("SENSE_GATEWAY_PORT") {
            if let Ok(p) = port.parse() {
                self.gateway.port = p;
            }
        }
        if let Ok(static_dir) = std::env::var("SENSE_STATIC_DIR") {
            self.gateway.static_dir = static_dir;
        }

        // Backend overrides
        if let Ok(url) = std::env::var("SENSE_BACKEND_URL") {
            self.backend.base_url = url;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("SENSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SENSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SENSE Data Market Configuration
#
# Environment variables override these settings:
# - SENSE_GATEWAY_HOST
# - SENSE_GATEWAY_PORT
# - SENSE_STATIC_DIR
# - SENSE_BACKEND_URL
# - SENSE_LOG_LEVEL
# - SENSE_LOG_FORMAT

[gateway]
# Gateway server host
host = "0.0.0.0"

# Gateway server port
port = 8084

# Directory with the built sense-ui assets
static_dir = "sense-ui/dist"

[backend]
# Base URL of the record backend
base_url = "http://localhost:8000"

# Request timeout in milliseconds
request_timeout_ms = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gateway.port, 8084);
        assert_eq!(config.gateway.addr(), "0.0.0.0:8084");
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_records_url_strips_trailing_slash() {
        let backend = BackendConfig {
            base_url: "http://192.168.1.143:8000/".to_string(),
            ..Default::default()
        };
        assert_eq!(backend.records_url(), "http://192.168.1.143:8000/records");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[gateway]
port = 9090

[backend]
base_url = "http://backend:8000"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.gateway.port, 9090);
        // Unset fields keep their defaults
        assert_eq!(config.gateway.host, "0.0.0.0");
        assert_eq!(config.backend.base_url, "http://backend:8000");
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[gateway]
port = 9090

[backend]
base_url = "http://file-backend:8000"
"#
        )
        .unwrap();

        std::env::set_var("SENSE_GATEWAY_PORT", "7070");
        std::env::set_var("SENSE_BACKEND_URL", "http://env-backend:8000");

        let config = Config::load_with_env(file.path());

        std::env::remove_var("SENSE_GATEWAY_PORT");
        std::env::remove_var("SENSE_BACKEND_URL");

        let config = config.unwrap();
        assert_eq!(config.gateway.port, 7070);
        assert_eq!(config.backend.base_url, "http://env-backend:8000");
        // Settings without an override keep the file/default value
        assert_eq!(config.gateway.host, "0.0.0.0");

        // An unparsable port override is ignored, env vars are
        // process-global so this stays in the same test
        std::env::set_var("SENSE_GATEWAY_PORT", "not-a-port");
        let config = Config::from_env();
        std::env::remove_var("SENSE_GATEWAY_PORT");
        assert_eq!(config.gateway.port, 8084);
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.gateway.port, 8084);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
