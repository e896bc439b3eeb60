//! Text reporters, one per collection, and the closing summary.
//!
//! Collections are fetched and printed one at a time in [`CollectionName::ALL`]
//! order. Every section starts with its heading block and ends with exactly
//! one blank line.

mod ads;
mod apps;
mod concepts;
mod contacts;
mod grouped;
mod lectures;
mod summary;

use std::io::{self, Write};

use anyhow::Context;
use probe_core::entities::{
    AffiliateAd, App, Concept, ContactSubmission, FromDocument, Lecture,
};
use probe_core::{CollectionCounts, CollectionName};
use probe_store::DocumentSource;

pub use grouped::group_by_app;

/// Fetch and print all five collections, then the summary line.
///
/// Returns the counts the summary line was built from.
pub fn run<W: Write>(source: &dyn DocumentSource, out: &mut W) -> anyhow::Result<CollectionCounts> {
    let mut counts = CollectionCounts::default();

    for name in CollectionName::ALL {
        let count = match name {
            CollectionName::Apps => {
                let apps: Vec<App> = fetch(source, name)?;
                apps::write(out, &apps)?;
                apps.len()
            }
            CollectionName::Concepts => {
                let concepts: Vec<Concept> = fetch(source, name)?;
                let count = concepts.len();
                concepts::write(out, count, &group_by_app(concepts))?;
                count
            }
            CollectionName::Lectures => {
                let lectures: Vec<Lecture> = fetch(source, name)?;
                let count = lectures.len();
                lectures::write(out, count, &group_by_app(lectures))?;
                count
            }
            CollectionName::ContactSubmissions => {
                let contacts: Vec<ContactSubmission> = fetch(source, name)?;
                contacts::write(out, &contacts)?;
                contacts.len()
            }
            CollectionName::AffiliateAds => {
                let ads: Vec<AffiliateAd> = fetch(source, name)?;
                ads::write(out, &ads)?;
                ads.len()
            }
        };
        counts.record(name, count);
    }

    summary::write(out, &counts)?;
    out.flush()?;
    Ok(counts)
}

/// Read a whole collection and decode its records.
pub fn fetch<T: FromDocument>(
    source: &dyn DocumentSource,
    name: CollectionName,
) -> anyhow::Result<Vec<T>> {
    let docs = source
        .list_documents(name)
        .with_context(|| format!("failed to read collection '{name}'"))?;
    tracing::debug!(collection = %name, documents = docs.len(), "collection loaded");
    Ok(T::from_documents(&docs))
}

fn heading<W: Write>(out: &mut W, name: CollectionName, count: usize) -> io::Result<()> {
    writeln!(out, "=== {} ===", name.heading())?;
    writeln!(out, "총 {count}개")?;
    writeln!(out)
}

/// Empty-state line plus the section's closing blank line.
fn placeholder<W: Write>(out: &mut W, name: CollectionName) -> io::Result<()> {
    if let Some(text) = name.empty_placeholder() {
        writeln!(out, "  {text}")?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use probe_core::{CollectionName, Document, FieldValue, Fields};
    use probe_store::{DocumentSource, StoreError};

    /// In-memory collections; anything not seeded is empty.
    #[derive(Default)]
    pub struct FakeSource {
        collections: HashMap<CollectionName, Vec<Document>>,
        failing: Option<CollectionName>,
    }

    impl FakeSource {
        pub fn with(mut self, name: CollectionName, docs: Vec<Document>) -> Self {
            self.collections.insert(name, docs);
            self
        }

        pub fn failing_on(mut self, name: CollectionName) -> Self {
            self.failing = Some(name);
            self
        }
    }

    impl DocumentSource for FakeSource {
        fn list_documents(&self, collection: CollectionName) -> Result<Vec<Document>, StoreError> {
            if self.failing == Some(collection) {
                return Err(StoreError::Api {
                    status: 403,
                    message: "PERMISSION_DENIED".into(),
                });
            }
            Ok(self.collections.get(&collection).cloned().unwrap_or_default())
        }
    }

    pub fn doc(id: &str, fields: &[(&str, FieldValue)]) -> Document {
        let fields: Fields = fields
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();
        Document::new(id, fields)
    }

    pub fn s(value: &str) -> FieldValue {
        FieldValue::String(value.to_string())
    }

    pub fn concept(id: &str, app_id: &str, title: &str, category: &str, importance: i64) -> Document {
        doc(
            id,
            &[
                ("app_id", s(app_id)),
                ("title", s(title)),
                ("category", s(category)),
                ("importance", FieldValue::Integer(importance)),
            ],
        )
    }

    pub fn lecture(id: &str, app_id: &str, title: &str, category: &str, seconds: i64) -> Document {
        doc(
            id,
            &[
                ("app_id", s(app_id)),
                ("title", s(title)),
                ("category", s(category)),
                ("duration_seconds", FieldValue::Integer(seconds)),
            ],
        )
    }

    pub fn render(source: &FakeSource) -> String {
        let mut out = Vec::new();
        super::run(source, &mut out).expect("report runs");
        String::from_utf8(out).expect("utf-8 report")
    }
}
