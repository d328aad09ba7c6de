use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::reply;
use crate::utils::ident;

/// Role-filtered command list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Help { from } = cmd {
        let from = ident::normalize(from)?;
        let svc = AttendanceService::open(cfg);
        reply(svc.help_text(&from));
    }
    Ok(())
}
