//! Configuration file parsing and structures.
//!
//! The daemon is configured with a single TOML file: logging settings and the
//! ViCare device to poll.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::filter::Targets;

use crate::integrations::vicare::HeatingType;

/// Top-level configuration structure
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub vicare: ViCareConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default)]
    pub level: LogLevel,

    /// Per-target levels, e.g. `"vicare::engine" = "debug"`
    #[serde(default)]
    pub overrides: HashMap<String, LogLevel>,
}

impl LoggingConfig {
    /// Build a tracing filter from the default level and overrides
    pub fn filter(&self) -> Targets {
        let mut filter = Targets::new().with_default(LevelFilter::from(self.level));
        for (target, level) in &self.overrides {
            filter = filter.with_target(target.clone(), LevelFilter::from(*level));
        }
        filter
    }
}

fn default_name() -> String {
    "ViCare".to_string()
}

fn default_scan_interval() -> u64 {
    60
}

/// ViCare device configuration
#[derive(Debug, Deserialize)]
pub struct ViCareConfig {
    /// Device display name, prefixed to every sensor name (default: "ViCare")
    #[serde(default = "default_name")]
    pub name: String,

    /// Heating type, selects the sensor set (default: generic)
    #[serde(default)]
    pub heating_type: HeatingType,

    /// Seconds between polls (default: 60)
    #[serde(default = "default_scan_interval")]
    pub scan_interval: u64,

    /// Snapshot document backing the device. Relative paths are resolved
    /// against the config file's directory.
    pub snapshot: PathBuf,
}

impl ViCareConfig {
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let mut config = Self::from_toml(&contents)?;
        if config.vicare.snapshot.is_relative() {
            if let Some(dir) = path.parent() {
                config.vicare.snapshot = dir.join(&config.vicare.snapshot);
            }
        }
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.vicare.scan_interval == 0 {
            return Err(ConfigError::Invalid(
                "vicare.scan_interval must be greater than zero".to_string(),
            ));
        }
        if self.vicare.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "vicare.name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
