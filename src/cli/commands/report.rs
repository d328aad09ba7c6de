use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::{AppError, AppResult};
use crate::report;
use crate::utils::date;
use crate::utils::ident;
use std::path::Path;

/// Export one day's attendance document (leader-only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        from,
        date: report_date,
        format,
        file,
    } = cmd
    {
        let from = ident::normalize(from)?;

        let day = match report_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let svc = AttendanceService::open(cfg);
        let rows = svc.day_report(&from, day)?;

        report::write_report(day, &rows, format, Path::new(file))?;
    }
    Ok(())
}
