use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::store::PersistenceStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - empty roster and ledger records, unless records already exist
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.data_dir.clone(), cli.test)?;

    let store = PersistenceStore::new(&cfg.data_dir);
    if !store.roster_path().exists() && !store.ledger_path().exists() {
        store.save(&Roster::new(), &AttendanceLedger::new())?;
    }

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Data dir    : {}", cfg.data_dir));
    success("attendo initialized");
    Ok(())
}
