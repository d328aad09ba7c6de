use serde::{Deserialize, Serialize};

/// A single day's attendance mark. "Unset" is the absence of an entry,
/// never a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "+")]
    Present,
    #[serde(rename = "-")]
    Absent,
}

impl Mark {
    /// Parse the manual-channel token. Only the exact tokens are accepted;
    /// anything else is a usage error upstream.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Present),
            "-" => Some(Self::Absent),
            _ => None,
        }
    }

    /// Wire token, also used in the persisted ledger record.
    pub fn token(&self) -> &'static str {
        match self {
            Mark::Present => "+",
            Mark::Absent => "-",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Mark::Present => "present",
            Mark::Absent => "absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Mark::Present)
    }
}
