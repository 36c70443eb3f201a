//! Core error types for tickstack-core.
//!
//! Validation failures decline the operation and leave registry state
//! unchanged; store failures are non-fatal because in-memory state stays
//! authoritative for the session.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tickstack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
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
}

/// Blob-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Writing a blob failed
    #[error("Failed to write blob '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing a blob failed
    #[error("Failed to remove blob '{key}': {source}")]
    RemoveFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization produced no storable value
    #[error("Refusing to persist null value for key '{0}'")]
    NullValue(String),

    /// Serialization failed
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Timer name is empty after trimming
    #[error("Timer name must not be empty")]
    EmptyName,

    /// Timer duration is not positive
    #[error("Timer duration must be positive (got {0} seconds)")]
    InvalidDuration(u64),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
