//! Closed enumerations for Snag records.
//!
//! Defect statuses and priorities serialize with their canonical display
//! labels (`"InProgress"`, `"Critical"`); roles, project statuses, and
//! history actions serialize lowercase. These labels are part of the wire
//! format and of the storage format, so renaming a variant is a breaking
//! change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Access level of a user account.
///
/// Signup always produces `Observer`; only the admin-gated role-update
/// operation changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Observer,
    Engineer,
    Manager,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observer => "observer",
            Self::Engineer => "engineer",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observer" => Ok(Self::Observer),
            "engineer" => Ok(Self::Engineer),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!("unknown role: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// DefectStatus
// ---------------------------------------------------------------------------

/// Workflow status of a defect. New defects always start as `New`.
///
/// There is no enforced transition graph: status is set freely through the
/// defect-update merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectStatus {
    New,
    InProgress,
    InReview,
    Closed,
    Cancelled,
}

impl DefectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "InProgress",
            Self::InReview => "InReview",
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for DefectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DefectPriority
// ---------------------------------------------------------------------------

/// Priority label of a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl DefectPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for DefectPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a project. Handlers only ever set `Active`; no
/// current operation moves a project to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HistoryAction
// ---------------------------------------------------------------------------

/// Action recorded by a history entry. Comment additions deliberately do not
/// produce history entries, so there is no `commented` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Created,
    Updated,
}

impl HistoryAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip_lowercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Admin);
    }

    #[test]
    fn role_from_str_accepts_all_four() {
        for (s, expected) in [
            ("observer", Role::Observer),
            ("engineer", Role::Engineer),
            ("manager", Role::Manager),
            ("admin", Role::Admin),
        ] {
            assert_eq!(s.parse::<Role>().unwrap(), expected);
        }
    }

    #[test]
    fn role_from_str_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn defect_status_serializes_with_display_labels() {
        let json = serde_json::to_string(&DefectStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
        let back: DefectStatus = serde_json::from_str("\"InReview\"").unwrap();
        assert_eq!(back, DefectStatus::InReview);
    }

    #[test]
    fn priority_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_string(&DefectPriority::Critical).unwrap(),
            "\"Critical\""
        );
    }

    #[test]
    fn history_action_lowercase() {
        assert_eq!(
            serde_json::to_string(&HistoryAction::Created).unwrap(),
            "\"created\""
        );
        assert_eq!(HistoryAction::Updated.as_str(), "updated");
    }

    #[test]
    fn project_status_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
