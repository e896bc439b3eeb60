use std::io::{self, Write};

use probe_core::entities::Concept;
use probe_core::{CollectionName, OrderedGroups};

use super::grouped::write_groups;

pub(super) fn write<W: Write>(
    out: &mut W,
    total: usize,
    groups: &OrderedGroups<Concept>,
) -> io::Result<()> {
    super::heading(out, CollectionName::Concepts, total)?;
    write_groups(out, groups, |out, c| {
        writeln!(out, "    - {} (중요도: {}, {})", c.title, c.importance, c.category)
    })
}
