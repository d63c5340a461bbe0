//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Upstream stats source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Whether the import command may hit the network
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base URL of the upstream stats API
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// Fixed delay between sequential upstream calls
    #[serde(default = "default_rate_limit")]
    pub rate_limit_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// How many ranked teams to import
    #[serde(default = "default_import_limit")]
    pub import_limit: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_upstream_url() -> String {
    "https://stats.example.com/api".to_string()
}

fn default_rate_limit() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    30
}

fn default_import_limit() -> usize {
    20
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_upstream_url(),
            rate_limit_ms: default_rate_limit(),
            timeout_seconds: default_timeout(),
            import_limit: default_import_limit(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            upstream: UpstreamConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.upstream.import_limit == 0 {
            return Err(ConfigError::ValidationError(
                "Import limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.import_limit, 20);
        assert_eq!(config.upstream.rate_limit_ms, 1000);
    }

    #[test]
    fn test_config_validation_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_import_limit() {
        let mut config = AppConfig::default();
        config.upstream.import_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            data_dir = "/srv/esports"

            [upstream]
            rate_limit_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/esports"));
        assert_eq!(config.upstream.rate_limit_ms, 2500);
        // Untouched sections keep their defaults.
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.upstream.base_url, parsed.upstream.base_url);
    }
}
