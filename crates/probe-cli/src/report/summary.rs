use std::io::{self, Write};

use probe_core::{CollectionCounts, CollectionName};

/// One line built from counts captured during the run; nothing is refetched.
pub(super) fn write<W: Write>(out: &mut W, counts: &CollectionCounts) -> io::Result<()> {
    writeln!(out, "=== 요약 ===")?;
    let parts: Vec<String> = CollectionName::ALL
        .iter()
        .map(|&name| format!("{}: {}개", name.summary_label(), counts.get(name)))
        .collect();
    writeln!(out, "{}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labels_follow_collection_order() {
        let counts = CollectionCounts {
            apps: 4,
            concepts: 120,
            lectures: 9,
            contact_submissions: 0,
            affiliate_ads: 2,
        };
        let mut out = Vec::new();
        write(&mut out, &counts).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== 요약 ===\n앱: 4개, 개념: 120개, 강의: 9개, 문의: 0개, 광고: 2개\n"
        );
    }
}
