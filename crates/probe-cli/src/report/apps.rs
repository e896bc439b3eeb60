use std::io::{self, Write};

use probe_core::CollectionName;
use probe_core::entities::App;

/// Full detail for every app; no truncation and no empty-state line.
pub(super) fn write<W: Write>(out: &mut W, apps: &[App]) -> io::Result<()> {
    super::heading(out, CollectionName::Apps, apps.len())?;
    for app in apps {
        writeln!(out, "  [{}]", app.id)?;
        writeln!(out, "    이름: {} ({})", app.app_name, app.app_name_full)?;
        writeln!(out, "    상태: {} | 분류: {}", app.status, app.app_category)?;
        write!(out, "    과목: ")?;
        serde_json::to_writer(&mut *out, &app.categories)?;
        writeln!(out)?;
        writeln!(
            out,
            "    평점: {} | 리뷰: {} | 다운로드: {}",
            app.rating, app.review_count, app.download_count
        )?;
        writeln!(
            out,
            "    아이콘: {} | 스토어URL: {}",
            flag(app.has_icon),
            flag(app.has_store_url)
        )?;
        writeln!(out)?;
    }
    Ok(())
}

const fn flag(present: bool) -> &'static str {
    if present { "O" } else { "X" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_app_prints_defaults() {
        let app = App {
            id: "com.jmk.empty".into(),
            ..App::default()
        };
        let mut out = Vec::new();
        write(&mut out, &[app]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== APPS ===\n총 1개\n\n  [com.jmk.empty]\n    이름:  ()\n    상태:  | 분류: \n    과목: []\n    평점: 0 | 리뷰: 0 | 다운로드: 0\n    아이콘: X | 스토어URL: X\n\n"
        );
    }
}
