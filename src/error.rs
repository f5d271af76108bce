//! Custom error types for fastlane2json with improved type safety.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fastlane2json operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    // Changelog lookup errors
    #[error(
        "no changelog found for version {version}: expected file at {}",
        .path.display()
    )]
    MissingChangelog { version: String, path: PathBuf },

    // IO errors - automatic conversion via #[from]
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    // JSON encoding errors
    #[error("JSON encoding failed: {0}")]
    JsonError(#[from] serde_json::Error),

    // TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
