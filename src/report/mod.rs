//! Rendering of one day's attendance into a document artifact.
//!
//! Every format renders the same sequence: title with the date, then one
//! row per student in roster insertion order.

mod csv;
mod pdf;
mod text;
mod xlsx;

use crate::errors::AppResult;
use crate::models::mark::Mark;
use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// One report row: display name plus the day's mark, if any.
pub type ReportRow = (String, Option<Mark>);

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
    Pdf,
    Xlsx,
}

pub fn write_report(
    date: NaiveDate,
    rows: &[ReportRow],
    format: &ReportFormat,
    path: &Path,
) -> AppResult<()> {
    match format {
        ReportFormat::Text => text::write_text(date, rows, path),
        ReportFormat::Csv => csv::write_csv(date, rows, path),
        ReportFormat::Pdf => pdf::write_pdf(date, rows, path),
        ReportFormat::Xlsx => xlsx::write_xlsx(date, rows, path),
    }
}

pub(crate) fn report_title(date: NaiveDate) -> String {
    format!("Attendance {}", date.format("%Y-%m-%d"))
}

pub(crate) fn mark_label(mark: Option<Mark>) -> &'static str {
    match mark {
        Some(m) => m.describe(),
        None => "not marked",
    }
}

/// Common completion message for report writers.
pub(crate) fn notify_report_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}
