use serde::{Deserialize, Serialize};

/// Role of a roster entry. Leaders manage the roster and request reports,
/// students record attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Leader,
}

impl Role {
    /// Parse a role token (case-insensitive on input, lowercase on the wire).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" => Some(Self::Student),
            "leader" => Some(Self::Leader),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Leader => "leader",
        }
    }

    pub fn is_leader(&self) -> bool {
        matches!(self, Role::Leader)
    }

    pub fn is_student(&self) -> bool {
        matches!(self, Role::Student)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: Role,
}
