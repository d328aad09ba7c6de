use crate::errors::{AppError, AppResult};
use crate::report::{ReportRow, mark_label, notify_report_success};
use chrono::NaiveDate;
use csv::Writer;
use std::path::Path;

pub(crate) fn write_csv(date: NaiveDate, rows: &[ReportRow], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_report_error)?;

    wtr.write_record(["date", "name", "mark"])
        .map_err(to_report_error)?;

    let date_str = date.format("%Y-%m-%d").to_string();
    for (name, mark) in rows {
        wtr.write_record([date_str.as_str(), name.as_str(), mark_label(*mark)])
            .map_err(to_report_error)?;
    }

    wtr.flush()?;
    notify_report_success("CSV", path);
    Ok(())
}

fn to_report_error(e: csv::Error) -> AppError {
    AppError::Report(e.to_string())
}
