use serde::{Deserialize, Serialize};

use super::FromDocument;
use crate::document::Document;
use crate::number::Number;

/// A published study app (document id is the bundle id).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct App {
    pub id: String,
    pub app_name: String,
    pub app_name_full: String,
    /// Lifecycle status: `draft`, `published`, or `archived`.
    pub status: String,
    pub app_category: String,
    /// Subject categories covered by the app.
    pub categories: Vec<String>,
    pub rating: f64,
    pub review_count: Number,
    pub download_count: Number,
    pub has_icon: bool,
    pub has_store_url: bool,
}

impl FromDocument for App {
    fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            app_name: f.string("app_name"),
            app_name_full: f.string("app_name_full"),
            status: f.string("status"),
            app_category: f.string("app_category"),
            categories: f.string_list("categories"),
            rating: f.number("rating"),
            review_count: f.numeric("review_count"),
            download_count: f.numeric("download_count"),
            has_icon: f.is_truthy("icon_url"),
            has_store_url: f.is_truthy("app_store_url"),
        }
    }
}
