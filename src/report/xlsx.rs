use crate::errors::{AppError, AppResult};
use crate::report::{ReportRow, mark_label, notify_report_success, report_title};
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 2] = ["Name", "Mark"];

pub(crate) fn write_xlsx(date: NaiveDate, rows: &[ReportRow], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let title_format = Format::new().set_bold();
    worksheet
        .write_with_format(0, 0, report_title(date), &title_format)
        .map_err(to_io_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(2, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (row_index, (name, mark)) in rows.iter().enumerate() {
        let row = (row_index + 3) as u32;
        let label = mark_label(*mark);

        worksheet
            .write_with_format(row, 0, name, &cell_format)
            .map_err(to_io_app_error)?;
        worksheet
            .write_with_format(row, 1, label, &cell_format)
            .map_err(to_io_app_error)?;

        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(name.as_str()));
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(label));
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_report_success("XLSX", path);
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
