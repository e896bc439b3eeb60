//! The five inspected collections and their per-run document counts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Collections read by a probe run, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionName {
    Apps,
    Concepts,
    Lectures,
    ContactSubmissions,
    AffiliateAds,
}

impl CollectionName {
    pub const ALL: [Self; 5] = [
        Self::Apps,
        Self::Concepts,
        Self::Lectures,
        Self::ContactSubmissions,
        Self::AffiliateAds,
    ];

    /// Collection id as stored in Firestore.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Concepts => "concepts",
            Self::Lectures => "lectures",
            Self::ContactSubmissions => "contact_submissions",
            Self::AffiliateAds => "affiliate_ads",
        }
    }

    /// Section heading used in the text report.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Apps => "APPS",
            Self::Concepts => "CONCEPTS",
            Self::Lectures => "LECTURES",
            Self::ContactSubmissions => "CONTACT_SUBMISSIONS",
            Self::AffiliateAds => "AFFILIATE_ADS",
        }
    }

    /// Short label used in the summary line.
    #[must_use]
    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::Apps => "앱",
            Self::Concepts => "개념",
            Self::Lectures => "강의",
            Self::ContactSubmissions => "문의",
            Self::AffiliateAds => "광고",
        }
    }

    /// Placeholder printed when the collection is empty. Apps and concepts have none.
    #[must_use]
    pub const fn empty_placeholder(self) -> Option<&'static str> {
        match self {
            Self::Apps | Self::Concepts => None,
            Self::Lectures => Some("(등록된 강의 없음)"),
            Self::ContactSubmissions => Some("(문의 없음)"),
            Self::AffiliateAds => Some("(등록된 광고 없음)"),
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document counts captured while a run reports each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCounts {
    pub apps: usize,
    pub concepts: usize,
    pub lectures: usize,
    pub contact_submissions: usize,
    pub affiliate_ads: usize,
}

impl CollectionCounts {
    pub fn record(&mut self, name: CollectionName, count: usize) {
        *self.slot_mut(name) = count;
    }

    #[must_use]
    pub const fn get(&self, name: CollectionName) -> usize {
        match name {
            CollectionName::Apps => self.apps,
            CollectionName::Concepts => self.concepts,
            CollectionName::Lectures => self.lectures,
            CollectionName::ContactSubmissions => self.contact_submissions,
            CollectionName::AffiliateAds => self.affiliate_ads,
        }
    }

    const fn slot_mut(&mut self, name: CollectionName) -> &mut usize {
        match name {
            CollectionName::Apps => &mut self.apps,
            CollectionName::Concepts => &mut self.concepts,
            CollectionName::Lectures => &mut self.lectures,
            CollectionName::ContactSubmissions => &mut self.contact_submissions,
            CollectionName::AffiliateAds => &mut self.affiliate_ads,
        }
    }
}
