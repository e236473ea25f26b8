//! Demo configuration
//!
//! Defaults, optionally overlaid by a TOML file, then by command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Package the simulated host scopes its screens under
    pub package_name: String,
    /// Text sent to the second screen by `open-with-extra`
    pub extra_text: String,
    /// Flags attached to `open-with-extra` requests
    pub flags: u32,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl DemoConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file, or defaults when no path is given
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// With package name
    #[inline]
    #[must_use]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    /// With extra text
    #[inline]
    #[must_use]
    pub fn with_extra_text(mut self, extra_text: impl Into<String>) -> Self {
        self.extra_text = extra_text.into();
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            package_name: "com.example.intentkit.demo".to_owned(),
            extra_text: "Hello from the main screen".to_owned(),
            flags: 0x1000_0000,
            log_filter: "info".to_owned(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// File is not valid configuration TOML
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// File that was read
        path: PathBuf,
        /// TOML decoding failure
        source: toml::de::Error,
    },
}
