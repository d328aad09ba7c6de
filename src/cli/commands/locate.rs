use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::ident;

/// Attendance mark for today derived from a reported location.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locate { from, lat, lon } = cmd {
        let from = ident::normalize(from)?;
        let mut svc = AttendanceService::open(cfg);
        let outcome = svc.mark_location(&from, date::today(), Coordinate::new(*lat, *lon))?;

        if outcome.mark.is_present() {
            success(format!(
                "You are at the university ({:.0} m from center)",
                outcome.distance_m
            ));
        } else {
            warning(format!(
                "You are not at the university ({:.0} m from center), marked absent",
                outcome.distance_m
            ));
        }
    }
    Ok(())
}
