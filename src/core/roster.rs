//! The roster: identity key -> person, with observable insertion order.

use crate::models::person::{Person, Role};
use serde::{Deserialize, Serialize};

/// One persisted roster row. Insertion order is part of the contract
/// (listing and report iteration follow it), so the roster serializes as a
/// JSON array of entries rather than an object keyed by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    #[serde(flatten)]
    pub person: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, id: &str) -> Option<&Person> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.person)
    }

    pub fn is_leader(&self, id: &str) -> bool {
        self.lookup(id).map(|p| p.role.is_leader()).unwrap_or(false)
    }

    pub fn is_student(&self, id: &str) -> bool {
        self.lookup(id).map(|p| p.role.is_student()).unwrap_or(false)
    }

    /// Insert or overwrite the record for `id`. Last write wins; an
    /// overwritten entry keeps its original position.
    pub fn add(&mut self, id: &str, name: &str, role: Role) {
        let person = Person {
            name: name.to_string(),
            role,
        };
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.person = person;
        } else {
            self.entries.push(RosterEntry {
                id: id.to_string(),
                person,
            });
        }
    }

    /// All entries in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = (&str, &Person)> {
        self.entries.iter().map(|e| (e.id.as_str(), &e.person))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
