use crate::errors::AppResult;
use crate::report::{ReportRow, mark_label, notify_report_success, report_title};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Plain-text rendition: title, blank line, one paragraph per student.
pub(crate) fn write_text(date: NaiveDate, rows: &[ReportRow], path: &Path) -> AppResult<()> {
    let mut out = String::new();
    out.push_str(&report_title(date));
    out.push_str("\n\n");

    for (name, mark) in rows {
        out.push_str(&format!("{}: {}\n", name, mark_label(*mark)));
    }

    fs::write(path, out)?;
    notify_report_success("Text", path);
    Ok(())
}
