//! Cross-cutting error types for docprobe.
//!
//! Transport, credential, and auth errors live in their own crates. This enum
//! covers failures in the shared data model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A document resource name that does not end in an identifier.
    #[error("Invalid document name: '{0}'")]
    InvalidDocumentName(String),
}
