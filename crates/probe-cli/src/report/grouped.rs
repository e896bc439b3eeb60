use std::io::{self, Write};

use probe_core::OrderedGroups;
use probe_core::entities::AppScoped;

/// Items printed per group before the elision line.
pub const DISPLAY_LIMIT: usize = 3;

/// Group records by owning app, in first-seen order.
pub fn group_by_app<T: AppScoped>(records: Vec<T>) -> OrderedGroups<T> {
    OrderedGroups::group_by(records, |record| record.app_id().to_string())
}

/// Print each group as a header line, its first [`DISPLAY_LIMIT`] items via
/// `item_line`, an elision line for the rest, and a blank line.
pub fn write_groups<W, T, F>(out: &mut W, groups: &OrderedGroups<T>, item_line: F) -> io::Result<()>
where
    W: Write,
    T: AppScoped,
    F: Fn(&mut W, &T) -> io::Result<()>,
{
    for group in groups {
        let categories = group.distinct(|item| item.category());
        writeln!(
            out,
            "  [app: {}] {}개 | 카테고리: {}",
            group.key,
            group.items.len(),
            categories.join(", ")
        )?;
        for item in group.head(DISPLAY_LIMIT) {
            item_line(out, item)?;
        }
        let hidden = group.remainder(DISPLAY_LIMIT);
        if hidden > 0 {
            writeln!(out, "    ... 외 {hidden}개")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
