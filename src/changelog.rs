//! Changelog file location and reading for the fastlane metadata layout.
use log::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::ConvertError, result::Result};

/// A version-specific changelog file in the fastlane metadata layout.
///
/// The version identifier is used verbatim to name the file: no validation
/// is performed on it.
#[derive(Debug, Clone)]
pub struct Changelog {
    version: String,
    path: PathBuf,
}

impl Changelog {
    /// Resolve the changelog file for `version` under `changelogs_dir`.
    pub fn locate(changelogs_dir: &Path, version: &str) -> Self {
        let path = changelogs_dir.join(format!("{version}.txt"));

        Self {
            version: version.to_string(),
            path,
        }
    }

    /// Path of the changelog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire changelog as UTF-8 text.
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path. A nonexistent file maps to [`ConvertError::MissingChangelog`]
    /// so the report names the version being looked up.
    pub fn read(&self) -> Result<String> {
        debug!("reading changelog: {}", self.path.display());

        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ConvertError::MissingChangelog {
                    version: self.version.clone(),
                    path: self.path.clone(),
                }
                .into())
            }
            Err(err) => Err(ConvertError::Io(err).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locate_joins_version_file_to_directory() {
        let changelog =
            Changelog::locate(Path::new("fastlane/changelogs"), "42");
        assert_eq!(
            changelog.path(),
            Path::new("fastlane/changelogs/42.txt")
        );
    }

    #[test]
    fn locate_uses_version_verbatim() {
        let changelog = Changelog::locate(Path::new("logs"), "1.2.3-beta");
        assert_eq!(changelog.path(), Path::new("logs/1.2.3-beta.txt"));
    }

    #[test_log::test]
    fn read_returns_file_content() {
        let tmp_dir = TempDir::new().unwrap();
        fs::write(tmp_dir.path().join("7.txt"), "Fixed login bug\n").unwrap();

        let changelog = Changelog::locate(tmp_dir.path(), "7");
        let content = changelog.read().unwrap();

        assert_eq!(content, "Fixed login bug\n");
    }

    #[test]
    fn read_fails_for_missing_version() {
        let tmp_dir = TempDir::new().unwrap();

        let changelog = Changelog::locate(tmp_dir.path(), "99");
        let err = changelog.read().unwrap_err();

        assert!(err.to_string().contains("no changelog found for version 99"));
    }
}
