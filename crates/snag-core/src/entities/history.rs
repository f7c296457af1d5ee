use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::HistoryAction;

/// An append-only audit record of a defect mutation.
///
/// One entry is written on defect creation and one per update call. Comment
/// additions write none. Entries are never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub defect_id: String,
    pub action: HistoryAction,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    /// For `updated`: the supplied field names (wire spelling), joined with
    /// `", "`. Absent for `created`. Field values are never recorded.
    pub details: Option<String>,
}
