//! Representation settings.
//!
//! Controls what the external [`ErrorRecord`](crate::ErrorRecord) carries.
//! Loaded from `opresult.toml` (or a `.json` file with the same shape):
//!
//! ```toml
//! [repr]
//! include_cause = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpResultConfig {
    #[serde(default)]
    pub repr: ReprConfig,
}

/// How errors are turned into their external representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReprConfig {
    /// Write the captured failure (`cause`). Defaults to on in debug builds
    /// and off in release builds.
    #[serde(default = "default_include_cause")]
    pub include_cause: bool,
}

fn default_include_cause() -> bool {
    cfg!(debug_assertions)
}

impl Default for ReprConfig {
    fn default() -> Self {
        Self {
            include_cause: default_include_cause(),
        }
    }
}

impl ReprConfig {
    /// Settings for production output: never expose causes.
    pub fn production() -> Self {
        Self {
            include_cause: false,
        }
    }

    /// Settings for diagnostics: always expose causes.
    pub fn diagnostic() -> Self {
        Self {
            include_cause: true,
        }
    }

    /// Load the `[repr]` table from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(OpResultConfig::load(path)?.repr)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: OpResultConfig = toml::from_str(content)?;
        Ok(config.repr)
    }
}

impl OpResultConfig {
    /// Load configuration from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        // Detect format based on extension
        if let Some(ext) = path.extension() {
            if ext == "json" {
                return Ok(serde_json::from_str(&content)?);
            }
        }

        // Default to TOML
        Ok(toml::from_str(&content)?)
    }
}
