//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use blescan_core::DEFAULT_TIMEOUT_SECS;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default scan duration in seconds
    #[serde(default)]
    pub timeout: Option<f64>,

    /// Default name filter
    #[serde(default)]
    pub filter_name: Option<String>,

    /// Always print JSON after the text output
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Get the default config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blescan")
            .join("config.toml")
    }

    /// Load config from `path` (or the default path), or return default if not found
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::path);
        if !path.exists() {
            return Self::default();
        }
        match Self::read(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {:#}", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Resolve the scan timeout: flag, then config, then built-in default.
pub fn resolve_timeout(flag: Option<f64>, config: &Config) -> f64 {
    flag.or(config.timeout).unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Resolve the name filter: flag, then config.
pub fn resolve_filter_name(flag: Option<String>, config: &Config) -> Option<String> {
    flag.or_else(|| config.filter_name.clone())
}
