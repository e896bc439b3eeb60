use crate::errors::CoreError;
use crate::fields::Fields;

/// One fetched document: its identifier within the collection plus its fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Build a document from its full resource name
    /// (`projects/{p}/databases/{d}/documents/{collection}/{id}`).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDocumentName` if the name has no final segment.
    pub fn from_resource_name(name: &str, fields: Fields) -> Result<Self, CoreError> {
        name.rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(|id| Self::new(id, fields))
            .ok_or_else(|| CoreError::InvalidDocumentName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_last_path_segment() {
        let doc = Document::from_resource_name(
            "projects/p/databases/(default)/documents/apps/com.example.quiz",
            Fields::new(),
        )
        .expect("valid name");
        assert_eq!(doc.id, "com.example.quiz");
    }

    #[test]
    fn bare_id_is_accepted() {
        let doc = Document::from_resource_name("abc123", Fields::new()).expect("valid name");
        assert_eq!(doc.id, "abc123");
    }

    #[test]
    fn trailing_slash_is_rejected() {
        let err = Document::from_resource_name("projects/p/documents/apps/", Fields::new())
            .unwrap_err();
        assert!(err.to_string().contains("Invalid document name"));
        assert!(Document::from_resource_name("", Fields::new()).is_err());
    }
}
