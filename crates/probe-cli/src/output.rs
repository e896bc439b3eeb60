//! `--format json`: every decoded record in one document.

use std::io::Write;

use probe_core::entities::{
    AffiliateAd, App, AppScoped, Concept, ContactSubmission, Lecture,
};
use probe_core::{CollectionCounts, CollectionName, OrderedGroups};
use probe_store::DocumentSource;
use serde::Serialize;

use crate::report::{fetch, group_by_app};

/// One owning app's records with their distinct categories. Unlike the text
/// report, no items are elided.
#[derive(Debug, Serialize)]
pub struct AppGroup<T> {
    pub app_id: String,
    pub count: usize,
    pub categories: Vec<String>,
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub apps: Vec<App>,
    pub concepts: Vec<AppGroup<Concept>>,
    pub lectures: Vec<AppGroup<Lecture>>,
    pub contact_submissions: Vec<ContactSubmission>,
    pub affiliate_ads: Vec<AffiliateAd>,
    pub summary: CollectionCounts,
}

/// Fetch the five collections in report order.
pub fn collect(source: &dyn DocumentSource) -> anyhow::Result<JsonReport> {
    let apps: Vec<App> = fetch(source, CollectionName::Apps)?;
    let concepts: Vec<Concept> = fetch(source, CollectionName::Concepts)?;
    let lectures: Vec<Lecture> = fetch(source, CollectionName::Lectures)?;
    let contact_submissions: Vec<ContactSubmission> =
        fetch(source, CollectionName::ContactSubmissions)?;
    let affiliate_ads: Vec<AffiliateAd> = fetch(source, CollectionName::AffiliateAds)?;

    let summary = CollectionCounts {
        apps: apps.len(),
        concepts: concepts.len(),
        lectures: lectures.len(),
        contact_submissions: contact_submissions.len(),
        affiliate_ads: affiliate_ads.len(),
    };

    Ok(JsonReport {
        apps,
        concepts: app_groups(group_by_app(concepts)),
        lectures: app_groups(group_by_app(lectures)),
        contact_submissions,
        affiliate_ads,
        summary,
    })
}

fn app_groups<T: AppScoped>(groups: OrderedGroups<T>) -> Vec<AppGroup<T>> {
    groups
        .into_groups()
        .map(|group| {
            let categories = group
                .distinct(|item| item.category())
                .into_iter()
                .map(str::to_string)
                .collect();
            AppGroup {
                count: group.items.len(),
                categories,
                app_id: group.key,
                items: group.items,
            }
        })
        .collect()
}

/// Pretty-printed JSON followed by a newline.
pub fn write<W: Write>(out: &mut W, report: &JsonReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::report::testing::{FakeSource, concept, doc, s};

    fn render(source: &FakeSource) -> Value {
        let report = collect(source).expect("collects");
        let mut out = Vec::new();
        write(&mut out, &report).expect("writes");
        serde_json::from_slice(&out).expect("valid json")
    }

    #[test]
    fn groups_keep_every_item_and_distinct_categories() {
        let source = FakeSource::default().with(
            CollectionName::Concepts,
            vec![
                concept("c1", "nursing", "a", "x", 1),
                concept("c2", "nursing", "b", "y", 2),
                concept("c3", "nursing", "c", "x", 3),
                concept("c4", "nursing", "d", "", 4),
                concept("c5", "pharm", "e", "z", 5),
            ],
        );

        let value = render(&source);
        let nursing = &value["concepts"][0];

        assert_eq!(nursing["app_id"], "nursing");
        assert_eq!(nursing["count"], 4);
        assert_eq!(nursing["categories"], json!(["x", "y", ""]));
        assert_eq!(nursing["items"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["concepts"][1]["app_id"], "pharm");
        assert_eq!(value["summary"]["concepts"], 5);
    }

    #[test]
    fn ads_keep_wire_field_names() {
        let source = FakeSource::default().with(
            CollectionName::AffiliateAds,
            vec![doc(
                "ad1",
                &[("type", s("coupang")), ("title", s("문제집"))],
            )],
        );

        let value = render(&source);
        assert_eq!(value["affiliate_ads"][0]["type"], "coupang");
        assert_eq!(value["affiliate_ads"][0]["isActive"], false);
        assert_eq!(
            value["summary"],
            json!({
                "apps": 0,
                "concepts": 0,
                "lectures": 0,
                "contact_submissions": 0,
                "affiliate_ads": 1
            })
        );
    }
}
