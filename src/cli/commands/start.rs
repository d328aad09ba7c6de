use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::reply;
use crate::utils::ident;

/// Greeting; registered students get the marking instructions.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { from } = cmd {
        let from = ident::normalize(from)?;
        let svc = AttendanceService::open(cfg);
        reply(svc.greeting(&from));
    }
    Ok(())
}
