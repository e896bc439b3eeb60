//! Firestore endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest page size the Firestore list endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 300;

fn default_project_id() -> String {
    "exam-affiliate-ads".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

const fn default_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirestoreConfig {
    /// GCP project the database belongs to.
    #[serde(default = "default_project_id")]
    pub project_id: String,

    /// Database id within the project.
    #[serde(default = "default_database")]
    pub database: String,

    /// REST API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Documents requested per list call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            database: default_database(),
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl FirestoreConfig {
    /// Root URL for document paths:
    /// `{base}/projects/{project}/databases/{database}/documents`.
    #[must_use]
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }

    /// Check field values figment cannot check by type alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty project id or a page
    /// size outside `1..=300`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "firestore.project_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "firestore.page_size".into(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size),
            });
        }
        Ok(())
    }
}
