//! Storage key layout for the key-value store.
//!
//! Records live under `user:<id>`, `project:<id>`, `defect:<id>`, and
//! `history:<defectId>:<entryId>`. Prefix scans retrieve all records of a
//! kind, and — because history keys embed the defect id — all history
//! entries for a single defect. Scan order is unspecified; chronological
//! consumers sort by timestamp explicitly.

/// Key prefix covering all user records.
pub const USER_PREFIX: &str = "user:";
/// Key prefix covering all project records.
pub const PROJECT_PREFIX: &str = "project:";
/// Key prefix covering all defect records.
pub const DEFECT_PREFIX: &str = "defect:";
/// Key prefix covering all history entries.
pub const HISTORY_PREFIX: &str = "history:";

/// Storage key of a user record.
#[must_use]
pub fn user(id: &str) -> String {
    format!("{USER_PREFIX}{id}")
}

/// Storage key of a project record.
#[must_use]
pub fn project(id: &str) -> String {
    format!("{PROJECT_PREFIX}{id}")
}

/// Storage key of a defect record.
#[must_use]
pub fn defect(id: &str) -> String {
    format!("{DEFECT_PREFIX}{id}")
}

/// Storage key of one history entry.
#[must_use]
pub fn history(defect_id: &str, entry_id: &str) -> String {
    format!("{HISTORY_PREFIX}{defect_id}:{entry_id}")
}

/// Scan prefix covering all history entries of one defect.
#[must_use]
pub fn history_for(defect_id: &str) -> String {
    format!("{HISTORY_PREFIX}{defect_id}:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_layout() {
        assert_eq!(user("user_abc"), "user:user_abc");
        assert_eq!(project("prj-1"), "project:prj-1");
        assert_eq!(defect("def-1"), "defect:def-1");
        assert_eq!(history("def-1", "hst-9"), "history:def-1:hst-9");
    }

    #[test]
    fn history_scan_prefix_matches_only_that_defect() {
        let key = history("def-1", "hst-9");
        assert!(key.starts_with(&history_for("def-1")));
        assert!(!key.starts_with(&history_for("def-10")));
    }
}
