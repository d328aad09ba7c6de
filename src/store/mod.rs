//! Persistence of the roster and ledger records.
//!
//! Two independent JSON files under the data directory. Load is fail-open:
//! a missing or unreadable record falls back to empty so the bot keeps
//! serving, and corruption is surfaced as a warning so silent data loss is
//! still visible to the operator. Save rewrites each record in full; the two
//! writes are deliberately not coupled.

use crate::core::ledger::AttendanceLedger;
use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROSTER_FILE: &str = "roster.json";
pub const LEDGER_FILE: &str = "ledger.json";

pub struct PersistenceStore {
    dir: PathBuf,
}

impl PersistenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn roster_path(&self) -> PathBuf {
        self.dir.join(ROSTER_FILE)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(LEDGER_FILE)
    }

    /// Load both records. Each falls back to empty independently, so a
    /// corrupt ledger never touches a valid roster and vice versa.
    pub fn load(&self) -> (Roster, AttendanceLedger) {
        let roster = load_record(&self.roster_path(), "roster");
        let ledger = load_record(&self.ledger_path(), "ledger");
        (roster, ledger)
    }

    /// Rewrite both records in full. Each file goes to a temporary sibling
    /// first and is renamed into place.
    pub fn save(&self, roster: &Roster, ledger: &AttendanceLedger) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        write_record(&self.roster_path(), roster)?;
        write_record(&self.ledger_path(), ledger)?;
        Ok(())
    }
}

fn load_record<T: Default + serde::de::DeserializeOwned>(path: &Path, label: &str) -> T {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warning(format!(
                "Ignoring unreadable {} record {}: {}",
                label,
                path.display(),
                e
            ));
            T::default()
        }
    }
}

fn write_record<T: serde::Serialize>(path: &Path, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::Store(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
