use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::ident;

/// Manual attendance mark for today: '+' or '-'.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark { from, token } = cmd {
        let from = ident::normalize(from)?;
        let mut svc = AttendanceService::open(cfg);
        let mark = svc.mark_manual(&from, date::today(), token)?;
        success(format!("Mark saved: {}", mark.token()));
    }
    Ok(())
}
