//! TOML-based user preferences.
//!
//! Holds the single persisted preference: the selected theme tag,
//! stored under a fixed key. The stored value is not validated against
//! the known tag set on read.
//!
//! Preferences are stored at `~/.config/choreboard/preferences.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// User preferences, serialized to/from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected theme tag, absent until the user picks one.
    #[serde(default)]
    pub theme: Option<String>,
}

impl Preferences {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("preferences.toml"))
    }

    /// Load from disk, or return defaults when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. Missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The saved theme tag, if any.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Overwrite the saved theme tag.
    pub fn set_theme(&mut self, tag: &str) {
        self.theme = Some(tag.to_string());
    }
}
