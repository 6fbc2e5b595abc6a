//! Core error types for aurafarm-core.
//!
//! The rule engine itself never fails; these errors belong to the layers
//! around it (configuration and snapshot acquisition).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for aurafarm-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot acquisition errors
    #[error("Snapshot source error: {0}")]
    Source(#[from] SourceError),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Errors raised while acquiring an environmental snapshot.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file was read but is not a valid snapshot
    #[error("Failed to parse snapshot {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Source could not produce data at all
    #[error("Snapshot source '{source_name}' unavailable: {message}")]
    Unavailable { source_name: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_wraps_into_core_error() {
        let err: CoreError = SourceError::Unavailable {
            source_name: "agro".to_string(),
            message: "offline".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Snapshot source error: Snapshot source 'agro' unavailable: offline"
        );
    }

    #[test]
    fn config_error_message_names_key() {
        let err = ConfigError::InvalidValue {
            key: "thresholds.soil_ph_min".to_string(),
            message: "must not exceed soil_ph_max".to_string(),
        };
        assert!(err.to_string().contains("thresholds.soil_ph_min"));
    }
}
