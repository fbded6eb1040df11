//! Triage classification labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way triage label assigned to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Someone needs help now
    Emergency,
    /// Genuine but not urgent
    NotEmergency,
    /// Fake report or spam
    Fake,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Classification {
    /// All labels, in probability-vector order.
    pub const ALL: [Classification; 3] = [
        Classification::Emergency,
        Classification::NotEmergency,
        Classification::Fake,
    ];

    /// Machine label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Emergency => "emergency",
            Classification::NotEmergency => "not_emergency",
            Classification::Fake => "fake",
        }
    }

    /// Headline shown to end users
    pub fn display_label(&self) -> &'static str {
        match self {
            Classification::Emergency => "EMERGENCY",
            Classification::NotEmergency => "NOT EMERGENCY",
            Classification::Fake => "FAKE / SPAM",
        }
    }
}
