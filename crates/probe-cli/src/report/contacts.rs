use std::io::{self, Write};

use probe_core::CollectionName;
use probe_core::entities::ContactSubmission;

pub(super) fn write<W: Write>(out: &mut W, contacts: &[ContactSubmission]) -> io::Result<()> {
    super::heading(out, CollectionName::ContactSubmissions, contacts.len())?;
    if contacts.is_empty() {
        super::placeholder(out, CollectionName::ContactSubmissions)?;
        return Ok(());
    }
    for contact in contacts {
        writeln!(
            out,
            "  [{}] {} | status: {}",
            contact.id, contact.subject, contact.status
        )?;
    }
    writeln!(out)
}
