use serde::{Deserialize, Serialize};

use super::{AppScoped, FromDocument, UNKNOWN_APP_ID};
use crate::document::Document;
use crate::number::Number;

/// An audio lecture belonging to one app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lecture {
    pub id: String,
    pub app_id: String,
    pub title: String,
    pub category: String,
    pub duration_seconds: Number,
}

impl FromDocument for Lecture {
    fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            app_id: f.string_or("app_id", UNKNOWN_APP_ID),
            title: f.string("title"),
            category: f.string("category"),
            duration_seconds: f.numeric("duration_seconds"),
        }
    }
}

impl AppScoped for Lecture {
    fn app_id(&self) -> &str {
        &self.app_id
    }

    fn category(&self) -> &str {
        &self.category
    }
}
