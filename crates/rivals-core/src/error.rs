//! Core error types for rivals-core.
//!
//! The scorer itself never fails; these errors cover the collaborators
//! around it (roster files, configuration, caller-supplied weights).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rivals-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Roster-related errors
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

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

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not determine or create the config directory
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Roster file errors.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file could not be read
    #[error("Failed to read roster {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster file is not valid TOML for the roster schema
    #[error("Failed to parse roster {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Roster file parsed but contains no heroes
    #[error("Roster {0} contains no heroes")]
    Empty(PathBuf),

    /// Roster could not be rendered back to TOML
    #[error("Failed to serialize roster: {0}")]
    Serialize(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
