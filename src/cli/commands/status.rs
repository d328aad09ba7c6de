use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::ident;

/// The sender's own mark for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { from } = cmd {
        let from = ident::normalize(from)?;
        let svc = AttendanceService::open(cfg);
        let today = date::today();

        match svc.status(&from, today)? {
            Some(mark) => info(format!("Your mark for {}: {}", today, mark.describe())),
            None => info(format!("Not marked yet for {}", today)),
        }
    }
    Ok(())
}
