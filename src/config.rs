//! Optional TOML configuration, located under the platform config directory
//! or an explicitly injected path so tests never depend on ambient process
//! state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ShareGuardError};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Follow symbolic links during traversal.
    pub follow_symlinks: bool,
    /// Override the ignore-file location.
    pub ignore_file: Option<PathBuf>,
    /// Built-in checks to skip, by name.
    pub disabled_checks: Vec<String>,
}

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ShareGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Load from the default location; an absent file yields defaults.
    ///
    /// # Errors
    /// Returns an error if a present file cannot be read or parsed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Platform config location, e.g. `~/.config/share-guard/config.toml`
    /// on Linux.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "share-guard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    #[must_use]
    pub fn is_check_disabled(&self, name: &str) -> bool {
        self.disabled_checks.iter().any(|c| c == name)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
