use serde::{Deserialize, Serialize};

use super::FromDocument;
use crate::document::Document;
use crate::number::Number;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AffiliateAd {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub ad_type: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub impressions: Number,
    pub clicks: Number,
}

impl FromDocument for AffiliateAd {
    fn from_document(doc: &Document) -> Self {
        let f = &doc.fields;
        Self {
            id: doc.id.clone(),
            title: f.string("title"),
            ad_type: f.string("type"),
            is_active: f.bool("isActive"),
            impressions: f.numeric("impressions"),
            clicks: f.numeric("clicks"),
        }
    }
}
