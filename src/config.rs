//! Configuration loading and parsing for `fastlane2json.toml` files.
//!
//! The config file is optional: a missing file means defaults.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{error::ConvertError, result::Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "fastlane2json.toml";

/// Default directory containing per-version changelog files.
pub const DEFAULT_CHANGELOGS_DIR: &str =
    "fastlane/metadata/android/en-US/changelogs";

/// Root configuration structure for `fastlane2json.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing `<version>.txt` changelog files, relative to
    /// the current working directory.
    pub changelogs_dir: String,
    /// Render lines as JSON string literals by default (default: false).
    /// The `--escape` CLI flag enables escaping regardless of this value.
    pub escape: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelogs_dir: DEFAULT_CHANGELOGS_DIR.to_string(),
            escape: false,
        }
    }
}

impl Config {
    /// Load configuration from `dir/fastlane2json.toml`, falling back to
    /// defaults when no config file is present.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(DEFAULT_CONFIG_FILE);

        if !path.exists() {
            info!("configuration not found: using default");
            return Ok(Config::default());
        }

        debug!("loading configuration: {}", path.display());

        let content = fs::read_to_string(&path).map_err(ConvertError::Io)?;
        let config: Config =
            toml::from_str(&content).map_err(ConvertError::TomlParseError)?;

        Ok(config)
    }
}
