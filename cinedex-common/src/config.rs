//! Configuration loading for the catalog service
//!
//! # Settings Sources Priority
//!
//! 1. Command-line arguments (--data-file, --host, --port)
//! 2. Environment variables (CINEDEX_DATA_FILE, CINEDEX_HOST, CINEDEX_PORT)
//! 3. TOML configuration file
//! 4. Built-in defaults (code constants)
//!
//! The first two tiers arrive together as [`ConfigOverrides`], already
//! merged by the CLI parser. A missing or broken TOML file never stops
//! startup; it is logged and the defaults apply.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Path to the movie dataset (CSV)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// HTTP bind address
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Origins allowed by CORS; an empty list falls back to the defaults
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Compiled-in fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("Movies.csv"),
            host: "127.0.0.1".to_string(),
            port: 5080,
            cors_origins: vec![
                "http://localhost:4200".to_string(),
                "https://localhost:4200".to_string(),
            ],
            log_level: default_log_level(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Explicit config file; otherwise the platform default location is tried
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve configuration from overrides, the TOML file, then defaults.
    ///
    /// Never fails: TOML problems are logged and skipped.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        let toml = match overrides.config_file.clone().or_else(default_config_path) {
            Some(path) if path.exists() => match load_toml_config(&path) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Ignoring configuration file {}: {}", path.display(), e);
                    TomlConfig::default()
                }
            },
            Some(path) => {
                if overrides.config_file.is_some() {
                    warn!("Configuration file not found: {}", path.display());
                }
                TomlConfig::default()
            }
            None => TomlConfig::default(),
        };

        Self::merge(overrides, toml, CompiledDefaults::default())
    }

    /// Apply priority order: overrides, then TOML, then compiled defaults
    pub fn merge(overrides: ConfigOverrides, toml: TomlConfig, defaults: CompiledDefaults) -> Self {
        Self {
            data_file: overrides
                .data_file
                .or(toml.data_file)
                .unwrap_or(defaults.data_file),
            host: overrides.host.or(toml.host).unwrap_or(defaults.host),
            port: overrides.port.or(toml.port).unwrap_or(defaults.port),
            cors_origins: if toml.cors_origins.is_empty() {
                defaults.cors_origins
            } else {
                toml.cors_origins
            },
            log_level: toml.logging.level,
        }
    }

    /// `host:port` for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Platform config location: `<config_dir>/cinedex/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cinedex").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let overrides = ConfigOverrides {
            data_file: Some(PathBuf::from("/cli/Movies.csv")),
            host: None,
            port: Some(9000),
            config_file: None,
        };
        let toml = TomlConfig {
            data_file: Some(PathBuf::from("/toml/Movies.csv")),
            host: Some("0.0.0.0".to_string()),
            port: Some(8000),
            ..Default::default()
        };

        let config = ServiceConfig::merge(overrides, toml, CompiledDefaults::default());
        assert_eq!(config.data_file, PathBuf::from("/cli/Movies.csv"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_merge_falls_back_to_defaults() {
        let config = ServiceConfig::merge(
            ConfigOverrides::default(),
            TomlConfig::default(),
            CompiledDefaults::default(),
        );
        assert_eq!(config.data_file, PathBuf::from("Movies.csv"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5080);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.log_level, "info");
    }
}
