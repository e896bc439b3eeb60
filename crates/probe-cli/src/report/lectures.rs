use std::io::{self, Write};

use probe_core::entities::Lecture;
use probe_core::{CollectionName, OrderedGroups};

use super::grouped::write_groups;

pub(super) fn write<W: Write>(
    out: &mut W,
    total: usize,
    groups: &OrderedGroups<Lecture>,
) -> io::Result<()> {
    super::heading(out, CollectionName::Lectures, total)?;
    if groups.is_empty() {
        super::placeholder(out, CollectionName::Lectures)?;
        return Ok(());
    }
    write_groups(out, groups, |out, l| {
        writeln!(out, "    - {} ({}, {}초)", l.title, l.category, l.duration_seconds)
    })
}
