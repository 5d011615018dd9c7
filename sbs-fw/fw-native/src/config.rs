//! Harness configuration

use sbs_io::Verbosity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable selecting the verbosity threshold
pub const ENV_VERBOSITY: &str = "SBS_VERBOSITY";
/// Environment variable selecting the poll interval in milliseconds
pub const ENV_POLL_MS: &str = "SBS_POLL_MS";
/// Disables ANSI colours when set, whatever its value
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Error type for harness configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Verbosity name not recognised
    InvalidVerbosity(String),
    /// Poll interval not a non-negative integer
    InvalidPollInterval(String),
    /// Malformed JSON configuration
    Json(String),
    /// A global logger is already installed
    LoggerInstalled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVerbosity(value) => {
                write!(f, "Invalid verbosity: {value}")
            }
            ConfigError::InvalidPollInterval(value) => {
                write!(f, "Invalid poll interval: {value}")
            }
            ConfigError::Json(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::LoggerInstalled => write!(f, "A logger is already installed"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings for the hosted harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeConfig {
    /// Threshold for both the printer and the `log` bridge
    pub verbosity: Verbosity,
    /// Delay between two presence polls
    pub poll_interval_ms: u64,
    /// Colour the poll loop's transition reports
    pub color: bool,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Error,
            poll_interval_ms: 100,
            color: true,
        }
    }
}

impl NativeConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, starting from the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_VERBOSITY) {
            config.verbosity = Verbosity::from_str(value.trim())
                .ok_or(ConfigError::InvalidVerbosity(value))?;
        }
        if let Some(value) = lookup(ENV_POLL_MS) {
            config.poll_interval_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPollInterval(value))?;
        }
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }

        Ok(config)
    }

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }
}
