use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::{AppError, AppResult};
use crate::models::person::Role;
use crate::ui::messages::success;
use crate::utils::ident;

/// Register or overwrite a roster entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        from,
        identity,
        name,
        role,
    } = cmd
    {
        let from = ident::normalize(from)?;
        let id = ident::normalize(identity)?;
        let role = Role::parse(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

        let mut svc = AttendanceService::open(cfg);
        svc.add_person(&from, &id, name, role)?;

        success(format!("Registered {} ({}) as {}", name, id, role.as_str()));
    }
    Ok(())
}
