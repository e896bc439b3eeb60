//! Firestore REST v1 list-response shapes.

use probe_core::{Document, Fields};
use serde::Deserialize;
use serde_json::Value;

use crate::error::StoreError;

/// One page of `GET .../documents/{collection}`.
///
/// An empty collection (or the page after the last) comes back as `{}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsPage {
    #[serde(default)]
    pub documents: Vec<RestDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl ListDocumentsPage {
    /// Token for the following page, if there is one.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestDocument {
    pub name: String,
    #[serde(default)]
    pub fields: Option<Value>,
}

impl RestDocument {
    /// Decode into a [`Document`] keyed by the last segment of `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if `name` has no identifier segment.
    pub fn into_document(self) -> Result<Document, StoreError> {
        let fields = Fields::from_rest(self.fields.as_ref());
        Ok(Document::from_resource_name(&self.name, fields)?)
    }
}

/// Parse a list response body.
///
/// # Errors
///
/// Returns `StoreError::Parse` if the body is not a list response.
pub fn parse_page(body: &str) -> Result<ListDocumentsPage, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Parse(format!("list response: {e}")))
}
