//! Configuration and credential error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The env file has no usable line for the credential key.
    #[error("{key} not found")]
    KeyNotFound { key: String, path: PathBuf },

    /// The env file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credential value is not valid JSON.
    #[error("{key} is not valid JSON: {source}")]
    InvalidJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The credential value is JSON but not an object.
    #[error("{key} must be a JSON object")]
    NotAnObject { key: String },
}

impl CredentialError {
    /// Whether this is the "key absent" condition, the one failure reported
    /// with a fixed message instead of an error trace.
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
