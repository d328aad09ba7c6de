//! The attendance service: role gating, the marking protocol and report
//! rows, all on top of service-owned state (no globals).
//!
//! Every successful mutation persists both records before the caller gets
//! its confirmation, so a reply always reflects durable state.

use crate::config::Config;
use crate::core::geo;
use crate::core::ledger::AttendanceLedger;
use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::mark::Mark;
use crate::models::person::{Person, Role};
use crate::store::PersistenceStore;
use chrono::NaiveDate;

/// Outcome of a location check-in, used to word the confirmation reply.
#[derive(Debug, Clone, Copy)]
pub struct LocationMark {
    pub mark: Mark,
    pub distance_m: f64,
}

pub struct AttendanceService {
    store: PersistenceStore,
    center: Coordinate,
    radius_m: f64,
    roster: Roster,
    ledger: AttendanceLedger,
}

impl AttendanceService {
    pub fn new(store: PersistenceStore, center: Coordinate, radius_m: f64) -> Self {
        let (roster, ledger) = store.load();
        Self {
            store,
            center,
            radius_m,
            roster,
            ledger,
        }
    }

    /// Load state from the store under the configured data directory.
    pub fn open(cfg: &Config) -> Self {
        Self::new(
            PersistenceStore::new(&cfg.data_dir),
            cfg.center(),
            cfg.allowed_radius_m,
        )
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // ---------------------------
    // Roster management
    // ---------------------------

    /// Register or overwrite a roster entry.
    ///
    /// The very first add on an empty roster is open to any caller so an
    /// empty system can be seeded; once one entry exists the caller must
    /// already be a leader.
    pub fn add_person(&mut self, caller: &str, id: &str, name: &str, role: Role) -> AppResult<()> {
        if !self.roster.is_empty() && !self.roster.is_leader(caller) {
            return Err(AppError::Permission(
                "only a leader can register people".to_string(),
            ));
        }
        self.roster.add(id, name, role);
        self.persist()
    }

    pub fn list_people(&self, caller: &str) -> AppResult<Vec<(&str, &Person)>> {
        self.require_leader(caller, "view the roster")?;
        Ok(self.roster.list_all().collect())
    }

    // ---------------------------
    // Attendance protocol
    // ---------------------------

    /// Manual channel: the token must be exactly '+' or '-'.
    pub fn mark_manual(&mut self, caller: &str, date: NaiveDate, token: &str) -> AppResult<Mark> {
        self.require_student(caller)?;
        let mark =
            Mark::from_token(token).ok_or_else(|| AppError::UnknownMarkToken(token.to_string()))?;
        self.ledger.set_mark(date, caller, mark);
        self.persist()?;
        Ok(mark)
    }

    /// Location channel: inside the allowed radius means present, outside
    /// means absent. Always records a mark once the caller resolves; a
    /// non-finite coordinate yields a NaN distance, which fails the radius
    /// comparison and marks absent.
    pub fn mark_location(
        &mut self,
        caller: &str,
        date: NaiveDate,
        reported: Coordinate,
    ) -> AppResult<LocationMark> {
        self.require_student(caller)?;

        let distance_m = geo::distance_meters(reported, self.center);
        let mark = if distance_m <= self.radius_m {
            Mark::Present
        } else {
            Mark::Absent
        };

        self.ledger.set_mark(date, caller, mark);
        self.persist()?;
        Ok(LocationMark { mark, distance_m })
    }

    /// The caller's own mark for the given date, if any.
    pub fn status(&self, caller: &str, date: NaiveDate) -> AppResult<Option<Mark>> {
        self.require_student(caller)?;
        Ok(self.ledger.get_mark(date, caller))
    }

    // ---------------------------
    // Reporting
    // ---------------------------

    /// One row per student, roster insertion order, with the day's mark if
    /// any. Errors when nothing at all was recorded for the date.
    pub fn day_report(
        &self,
        caller: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<(String, Option<Mark>)>> {
        self.require_leader(caller, "request the report")?;
        if !self.ledger.has_data_for(date) {
            return Err(AppError::NoDataForDate(date.format("%Y-%m-%d").to_string()));
        }

        Ok(self
            .roster
            .list_all()
            .filter(|(_, p)| p.role.is_student())
            .map(|(id, p)| (p.name.clone(), self.ledger.get_mark(date, id)))
            .collect())
    }

    // ---------------------------
    // Replies
    // ---------------------------

    pub fn greeting(&self, caller: &str) -> String {
        match self.roster.lookup(caller) {
            Some(p) if p.role.is_student() => format!(
                "Hi, {}! Send '+' if you are in class, '-' if not.\n\
                 You can also share your location to confirm.",
                p.name
            ),
            Some(p) => format!("Hi, {}!", p.name),
            None => "Hi! Ask your group leader to register you.".to_string(),
        }
    }

    pub fn help_text(&self, caller: &str) -> String {
        let mut lines = vec![
            "start - greeting and instructions".to_string(),
            "help - this list".to_string(),
        ];
        if self.roster.is_student(caller) {
            lines.push("mark +|- - mark yourself present or absent".to_string());
            lines.push("locate <lat> <lon> - confirm presence by location".to_string());
            lines.push("status - your mark for today".to_string());
        }
        if self.roster.is_leader(caller) || self.roster.is_empty() {
            lines.push("add <identity> <name> <role> - register a person".to_string());
            lines.push("list - show the roster".to_string());
            lines.push("report - export a day's attendance document".to_string());
        }
        lines.join("\n")
    }

    // ---------------------------
    // Internals
    // ---------------------------

    fn require_leader(&self, caller: &str, action: &str) -> AppResult<()> {
        if self.roster.is_leader(caller) {
            Ok(())
        } else {
            Err(AppError::Permission(format!("only a leader can {action}")))
        }
    }

    fn require_student(&self, caller: &str) -> AppResult<&Person> {
        match self.roster.lookup(caller) {
            None => Err(AppError::NotRegistered(caller.to_string())),
            Some(p) if !p.role.is_student() => Err(AppError::NotAStudent(caller.to_string())),
            Some(p) => Ok(p),
        }
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.roster, &self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const CENTER: Coordinate = Coordinate {
        lat: 41.351376,
        lon: 69.221844,
    };

    fn service(name: &str) -> AttendanceService {
        let dir = env::temp_dir().join(format!("{name}_attendo_service"));
        fs::remove_dir_all(&dir).ok();
        AttendanceService::new(PersistenceStore::new(dir), CENTER, 100.0)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn seed(svc: &mut AttendanceService) {
        svc.add_person("leader_a", "leader_a", "Alice", Role::Leader)
            .unwrap();
        svc.add_person("leader_a", "bob", "Bob", Role::Student)
            .unwrap();
    }

    #[test]
    fn bootstrap_allows_first_add_then_requires_leader() {
        let mut svc = service("bootstrap");

        // empty roster: anyone may seed
        svc.add_person("leader_a", "leader_a", "Alice", Role::Leader)
            .unwrap();
        // leader registers a student
        svc.add_person("leader_a", "bob", "Bob", Role::Student)
            .unwrap();
        // a student may not register anyone
        let err = svc
            .add_person("bob", "eve", "Eve", Role::Student)
            .unwrap_err();
        assert!(matches!(err, AppError::Permission(_)));
        assert_eq!(svc.roster().len(), 2);
    }

    #[test]
    fn manual_mark_requires_registration() {
        let mut svc = service("manual_unregistered");
        let err = svc.mark_manual("ghost", date(), "+").unwrap_err();
        assert!(matches!(err, AppError::NotRegistered(_)));
    }

    #[test]
    fn manual_mark_rejects_leaders() {
        let mut svc = service("manual_leader");
        seed(&mut svc);
        let err = svc.mark_manual("leader_a", date(), "+").unwrap_err();
        assert!(matches!(err, AppError::NotAStudent(_)));
    }

    #[test]
    fn manual_mark_rejects_unknown_tokens_without_state_change() {
        let mut svc = service("manual_token");
        seed(&mut svc);
        let err = svc.mark_manual("bob", date(), "yes").unwrap_err();
        assert!(matches!(err, AppError::UnknownMarkToken(_)));
        assert_eq!(svc.status("bob", date()).unwrap(), None);
    }

    #[test]
    fn location_near_then_far_overwrites_to_absent() {
        let mut svc = service("location_overwrite");
        seed(&mut svc);

        // ~50 m north of center
        let near = Coordinate::new(CENTER.lat + 0.00045, CENTER.lon);
        let outcome = svc.mark_location("bob", date(), near).unwrap();
        assert_eq!(outcome.mark, Mark::Present);
        assert!(outcome.distance_m < 100.0);

        // ~500 m north of center
        let far = Coordinate::new(CENTER.lat + 0.0045, CENTER.lon);
        let outcome = svc.mark_location("bob", date(), far).unwrap();
        assert_eq!(outcome.mark, Mark::Absent);
        assert!(outcome.distance_m > 100.0);

        assert_eq!(svc.status("bob", date()).unwrap(), Some(Mark::Absent));
    }

    #[test]
    fn non_finite_location_still_produces_a_mark() {
        let mut svc = service("location_nan");
        seed(&mut svc);

        let weird = Coordinate::new(f64::NAN, f64::INFINITY);
        let outcome = svc.mark_location("bob", date(), weird).unwrap();
        assert_eq!(outcome.mark, Mark::Absent);
        assert_eq!(svc.status("bob", date()).unwrap(), Some(Mark::Absent));
    }

    #[test]
    fn channels_share_last_write_wins() {
        let mut svc = service("channels");
        seed(&mut svc);

        svc.mark_manual("bob", date(), "-").unwrap();
        let near = Coordinate::new(CENTER.lat, CENTER.lon);
        svc.mark_location("bob", date(), near).unwrap();
        assert_eq!(svc.status("bob", date()).unwrap(), Some(Mark::Present));

        svc.mark_manual("bob", date(), "-").unwrap();
        assert_eq!(svc.status("bob", date()).unwrap(), Some(Mark::Absent));
    }

    #[test]
    fn day_report_errors_without_data() {
        let mut svc = service("report_nodata");
        seed(&mut svc);
        let err = svc.day_report("leader_a", date()).unwrap_err();
        assert!(matches!(err, AppError::NoDataForDate(_)));
    }

    #[test]
    fn day_report_lists_students_in_insertion_order() {
        let mut svc = service("report_rows");
        seed(&mut svc);
        svc.add_person("leader_a", "carol", "Carol", Role::Student)
            .unwrap();
        svc.mark_manual("carol", date(), "+").unwrap();

        let rows = svc.day_report("leader_a", date()).unwrap();
        assert_eq!(
            rows,
            vec![
                ("Bob".to_string(), None),
                ("Carol".to_string(), Some(Mark::Present)),
            ]
        );
    }

    #[test]
    fn day_report_is_leader_only() {
        let mut svc = service("report_gate");
        seed(&mut svc);
        svc.mark_manual("bob", date(), "+").unwrap();
        let err = svc.day_report("bob", date()).unwrap_err();
        assert!(matches!(err, AppError::Permission(_)));
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let dir = env::temp_dir().join("reopen_attendo_service");
        fs::remove_dir_all(&dir).ok();

        let mut svc = AttendanceService::new(PersistenceStore::new(&dir), CENTER, 100.0);
        seed(&mut svc);
        svc.mark_manual("bob", date(), "+").unwrap();
        drop(svc);

        let svc = AttendanceService::new(PersistenceStore::new(&dir), CENTER, 100.0);
        assert_eq!(svc.roster().len(), 2);
        assert_eq!(svc.status("bob", date()).unwrap(), Some(Mark::Present));
    }
}
