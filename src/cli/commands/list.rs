use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceService;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::ident;
use crate::utils::table::Table;

/// Show the roster as a table, insertion order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { from } = cmd {
        let from = ident::normalize(from)?;
        let svc = AttendanceService::open(cfg);
        let people = svc.list_people(&from)?;

        if people.is_empty() {
            info("The roster is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["Identity", "Name", "Role"]);
        for (id, person) in people {
            table.add_row(vec![
                id.to_string(),
                person.name.clone(),
                person.role.as_str().to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
