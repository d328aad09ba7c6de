//! The attendance ledger: date -> identity key -> mark.
//!
//! The ledger is keyed by the stable identity key, not the display name;
//! names are resolved against the roster only when rendering. It never
//! cross-checks the roster, so marks for identities that were later
//! overwritten simply stay in their day bucket. Days never close and no
//! bucket is ever pruned.

use crate::models::mark::Mark;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marks for one calendar day.
pub type DayLedger = BTreeMap<String, Mark>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceLedger {
    days: BTreeMap<NaiveDate, DayLedger>,
}

impl AttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional overwrite; creates the date bucket if absent.
    pub fn set_mark(&mut self, date: NaiveDate, id: &str, mark: Mark) {
        self.days
            .entry(date)
            .or_default()
            .insert(id.to_string(), mark);
    }

    pub fn get_mark(&self, date: NaiveDate, id: &str) -> Option<Mark> {
        self.days.get(&date).and_then(|d| d.get(id)).copied()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayLedger> {
        self.days.get(&date)
    }

    pub fn has_data_for(&self, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, n).unwrap()
    }

    #[test]
    fn unmarked_is_unset() {
        let ledger = AttendanceLedger::new();
        assert_eq!(ledger.get_mark(day(1), "bob"), None);
        assert!(!ledger.has_data_for(day(1)));
        assert!(ledger.day(day(1)).is_none());
    }

    #[test]
    fn set_mark_is_idempotent() {
        let mut ledger = AttendanceLedger::new();
        ledger.set_mark(day(1), "bob", Mark::Present);
        ledger.set_mark(day(1), "bob", Mark::Present);
        assert_eq!(ledger.get_mark(day(1), "bob"), Some(Mark::Present));
        assert_eq!(ledger.day(day(1)).unwrap().len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let mut ledger = AttendanceLedger::new();
        ledger.set_mark(day(1), "bob", Mark::Present);
        ledger.set_mark(day(1), "bob", Mark::Absent);
        assert_eq!(ledger.get_mark(day(1), "bob"), Some(Mark::Absent));
    }

    #[test]
    fn marks_are_scoped_per_day() {
        let mut ledger = AttendanceLedger::new();
        ledger.set_mark(day(1), "bob", Mark::Present);
        ledger.set_mark(day(2), "bob", Mark::Absent);

        assert_eq!(ledger.get_mark(day(1), "bob"), Some(Mark::Present));
        assert_eq!(ledger.get_mark(day(2), "bob"), Some(Mark::Absent));
        assert_eq!(ledger.get_mark(day(3), "bob"), None);
    }

    #[test]
    fn round_trips_with_wire_tokens() {
        let mut ledger = AttendanceLedger::new();
        ledger.set_mark(day(1), "bob", Mark::Present);
        ledger.set_mark(day(1), "carol", Mark::Absent);
        ledger.set_mark(day(2), "bob", Mark::Absent);

        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"2025-09-01\""));
        assert!(json.contains("\"+\""));

        let back: AttendanceLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
