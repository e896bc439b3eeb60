//! # probe-store
//!
//! Read-only access to Firestore over its REST v1 API.
//!
//! [`FirestoreClient`] lists whole collections with a bearer token from
//! `probe-auth`, following server page tokens so callers always get the full
//! collection. Reporting code depends only on the [`DocumentSource`] trait.

mod error;
mod firestore;
pub mod http;
pub mod rest;

pub use error::StoreError;
pub use firestore::FirestoreClient;

use probe_core::{CollectionName, Document};

/// Anything that can produce the full contents of a collection.
pub trait DocumentSource {
    /// Fetch every document in `collection`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the collection cannot be read.
    fn list_documents(&self, collection: CollectionName) -> Result<Vec<Document>, StoreError>;
}
