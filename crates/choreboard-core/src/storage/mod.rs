mod preferences;

pub use preferences::Preferences;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/choreboard[-dev]/` based on CHOREBOARD_ENV.
///
/// Set CHOREBOARD_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CHOREBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("choreboard-dev")
    } else {
        base_dir.join("choreboard")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}
