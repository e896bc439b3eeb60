use serde::{Deserialize, Serialize};

use super::{AppScoped, FromDocument, UNKNOWN_APP_ID};
use crate::document::Document;
use crate::number::Number;

/// A study concept belonging to one app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Concept {
    pub id: String,
    pub app_id: String,
    pub title: String,
    pub category: String,
    /// Importance score, usually 1-5.
    pub importance: Number,
}

impl FromDocument for Concept {
    fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            app_id: f.string_or("app_id", UNKNOWN_APP_ID),
            title: f.string("title"),
            category: f.string("category"),
            importance: f.numeric("importance"),
        }
    }
}

impl AppScoped for Concept {
    fn app_id(&self) -> &str {
        &self.app_id
    }

    fn category(&self) -> &str {
        &self.category
    }
}
