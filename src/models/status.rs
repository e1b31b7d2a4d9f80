//! Closed value sets for enumerated record fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the TO replenishment was done during the visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplenishmentStatus {
    Completed,
    Pending,
}

impl ReplenishmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for ReplenishmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A yes/no answer on a visit checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval state of a payment or a return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    Pending,
    Rejected,
}

impl ApprovalStatus {
    /// Every status, in display order
    pub const ALL: [ApprovalStatus; 3] = [Self::Approved, Self::Pending, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }

    /// Parse a status name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "approved" => Some(Self::Approved),
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_parse() {
        assert_eq!(ApprovalStatus::parse("approved"), Some(ApprovalStatus::Approved));
        assert_eq!(ApprovalStatus::parse(" Rejected "), Some(ApprovalStatus::Rejected));
        assert_eq!(ApprovalStatus::parse("cancelled"), None);
    }

    #[test]
    fn test_closed_value_sets_reject_unknown() {
        assert!(serde_json::from_str::<YesNo>("\"Maybe\"").is_err());
        assert!(serde_json::from_str::<ReplenishmentStatus>("\"Skipped\"").is_err());
        assert_eq!(
            serde_json::from_str::<ReplenishmentStatus>("\"Completed\"").unwrap(),
            ReplenishmentStatus::Completed
        );
    }
}
