//! Store error types.

use probe_core::CoreError;
use thiserror::Error;

/// Errors that can occur while reading from Firestore.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Firestore returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// A list response did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A listed document could not be turned into a record.
    #[error(transparent)]
    Core(#[from] CoreError),
}
