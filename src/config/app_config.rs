//! Deployment configuration as fully-defaulted TOML sections
//!
//! Every field has a default matching the built-in behavior, so a partial
//! config file (or none at all) is always valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration load/parse errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration for a vitaltrack deployment.
///
/// Load with `AppConfig::load()` which searches:
/// 1. `$VITALTRACK_CONFIG` env var
/// 2. `./vitaltrack.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage paths and retention sweeping
    #[serde(default)]
    pub storage: StorageConfig,

    /// Series analytics defaults
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// HTTP server section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the API server
    #[serde(default = "defaults::addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::addr(),
        }
    }
}

/// Storage section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the embedded database
    #[serde(default = "defaults::data_dir")]
    pub data_dir: PathBuf,

    /// Seconds between retention sweeps
    #[serde(default = "defaults::retention_sweep_interval_secs")]
    pub retention_sweep_interval_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
            retention_sweep_interval_secs: defaults::retention_sweep_interval_secs(),
        }
    }
}

/// Analytics section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Statistics window when a request does not specify one (days)
    #[serde(default = "defaults::default_window_days")]
    pub default_window_days: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_window_days: defaults::default_window_days(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn addr() -> String {
        "0.0.0.0:8080".to_string()
    }
    pub fn data_dir() -> PathBuf {
        PathBuf::from("./vitaltrack-data")
    }
    pub fn retention_sweep_interval_secs() -> u64 {
        3600
    }
    pub fn default_window_days() -> u32 {
        crate::analytics::DEFAULT_WINDOW_DAYS
    }
}

impl AppConfig {
    /// Load configuration using the standard search order:
    /// 1. `$VITALTRACK_CONFIG` environment variable
    /// 2. `./vitaltrack.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("VITALTRACK_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from VITALTRACK_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from VITALTRACK_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "VITALTRACK_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("vitaltrack.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./vitaltrack.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./vitaltrack.toml, using defaults");
                }
            }
        }

        info!("No vitaltrack.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.analytics.default_window_days, 30);
        assert_eq!(config.storage.retention_sweep_interval_secs, 3600);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            addr = "127.0.0.1:9999"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9999");
        assert_eq!(config.analytics.default_window_days, 30);
        assert_eq!(config.storage.data_dir, PathBuf::from("./vitaltrack-data"));
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
    }
}
