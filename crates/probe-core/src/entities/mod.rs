//! Typed records for the five inspected collections.
//!
//! Each record is decoded from a [`Document`] through the defaulting
//! [`Fields`](crate::Fields) accessors: a missing or mistyped field becomes
//! `""`, `0`, or `false` instead of an error.

mod affiliate_ad;
mod app;
mod concept;
mod contact;
mod lecture;

pub use affiliate_ad::AffiliateAd;
pub use app::App;
pub use concept::Concept;
pub use contact::ContactSubmission;
pub use lecture::Lecture;

use crate::document::Document;

/// Group key for records whose `app_id` is missing or empty.
pub const UNKNOWN_APP_ID: &str = "unknown";

/// Decode a record from a fetched document.
pub trait FromDocument: Sized {
    fn from_document(doc: &Document) -> Self;

    fn from_documents(docs: &[Document]) -> Vec<Self> {
        docs.iter().map(Self::from_document).collect()
    }
}

/// Records owned by an app and reported grouped by it.
pub trait AppScoped {
    fn app_id(&self) -> &str;
    fn category(&self) -> &str;
}
