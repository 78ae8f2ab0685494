//! Core error types for choreboard-core.
//!
//! This module defines the error hierarchy using thiserror so that
//! failures are reported with context across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for choreboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Preference/configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Preference-file specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the preferences file
    #[error("Failed to load preferences from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the preferences file
    #[error("Failed to save preferences to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the preferences file
    #[error("Failed to parse preferences: {0}")]
    ParseFailed(String),

    /// The preferences directory could not be resolved
    #[error("Preferences directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors for user-supplied input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace-only after trimming
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    /// Referenced entry does not exist
    #[error("No chore with id {id}")]
    UnknownChore { id: u64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
