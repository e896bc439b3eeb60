use serde::{Deserialize, Serialize};

use super::FromDocument;
use crate::document::Document;

/// A message sent through the public contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: String,
    pub subject: String,
    /// `pending`, `in_progress`, or `resolved`.
    pub status: String,
}

impl FromDocument for ContactSubmission {
    fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            subject: doc.fields.string("subject"),
            status: doc.fields.string("status"),
        }
    }
}
