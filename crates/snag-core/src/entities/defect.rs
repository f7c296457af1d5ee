use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{DefectPriority, DefectStatus};

/// A tracked defect within a project.
///
/// `project_id` and `assignee` are lax references: they may point at records
/// that no longer exist (or never did), and consumers render such references
/// as unknown rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: DefectPriority,
    pub assignee: Option<String>,
    pub project_id: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: DefectStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// One comment in a defect's append-only comment sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// User id of the commenting caller.
    pub author: String,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

/// Partial update of a defect: the closed set of fields a `PUT` may merge.
///
/// Supplied fields overwrite the stored ones (shallow, last-write-wins);
/// omitted fields are untouched. The nullable fields distinguish "absent"
/// from "supplied as null": a null clears the stored value and still counts
/// as supplied. There is no concurrency stamp — concurrent editors can
/// clobber each other.
// Double-Option distinguishes an absent field from one supplied as null.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectPatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub description: Option<Option<String>>,
    pub priority: Option<DefectPriority>,
    #[serde(default, deserialize_with = "supplied")]
    pub assignee: Option<Option<String>>,
    pub project_id: Option<String>,
    #[serde(default, deserialize_with = "supplied")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<DefectStatus>,
}

/// Marks a field as supplied even when its value is `null`; serde only calls
/// this when the key is present, so absence stays `None` via the default.
fn supplied<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

impl DefectPatch {
    /// Merge the supplied fields onto `defect` and return the wire names of
    /// the fields that were supplied, in declaration order.
    pub fn apply(self, defect: &mut Defect) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if let Some(title) = self.title {
            defect.title = title;
            changed.push("title");
        }
        if let Some(description) = self.description {
            defect.description = description;
            changed.push("description");
        }
        if let Some(priority) = self.priority {
            defect.priority = priority;
            changed.push("priority");
        }
        if let Some(assignee) = self.assignee {
            defect.assignee = assignee;
            changed.push("assignee");
        }
        if let Some(project_id) = self.project_id {
            defect.project_id = project_id;
            changed.push("projectId");
        }
        if let Some(due_date) = self.due_date {
            defect.due_date = due_date;
            changed.push("dueDate");
        }
        if let Some(status) = self.status {
            defect.status = status;
            changed.push("status");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_defect() -> Defect {
        let now = "2026-03-01T10:00:00Z".parse().unwrap();
        Defect {
            id: "def-0000000000000001".into(),
            title: "Login button unresponsive".into(),
            description: Some("Double click required on Safari".into()),
            priority: DefectPriority::Medium,
            assignee: None,
            project_id: "prj-0000000000000001".into(),
            due_date: None,
            status: DefectStatus::New,
            created_by: "user_creator".into(),
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut defect = sample_defect();
        let patch = DefectPatch {
            priority: Some(DefectPriority::High),
            status: Some(DefectStatus::InProgress),
            ..DefectPatch::default()
        };
        let changed = patch.apply(&mut defect);
        assert_eq!(changed, vec!["priority", "status"]);
        assert_eq!(defect.priority, DefectPriority::High);
        assert_eq!(defect.status, DefectStatus::InProgress);
        assert_eq!(defect.title, "Login button unresponsive");
    }

    #[test]
    fn patch_reports_wire_names() {
        let mut defect = sample_defect();
        let patch = DefectPatch {
            project_id: Some("prj-0000000000000002".into()),
            due_date: Some(Some("2026-04-01T00:00:00Z".parse().unwrap())),
            ..DefectPatch::default()
        };
        assert_eq!(patch.apply(&mut defect), vec!["projectId", "dueDate"]);
    }

    #[test]
    fn supplied_null_clears_field_and_counts_as_supplied() {
        let mut defect = sample_defect();
        defect.assignee = Some("user_bob".into());
        defect.due_date = Some("2026-05-01T00:00:00Z".parse().unwrap());

        let patch: DefectPatch =
            serde_json::from_str(r#"{"assignee":null,"dueDate":null}"#).unwrap();
        let changed = patch.apply(&mut defect);
        assert_eq!(changed, vec!["assignee", "dueDate"]);
        assert_eq!(defect.assignee, None);
        assert_eq!(defect.due_date, None);
    }

    #[test]
    fn absent_nullable_field_is_untouched() {
        let mut defect = sample_defect();
        defect.assignee = Some("user_bob".into());

        let patch: DefectPatch = serde_json::from_str(r#"{"title":"Renamed"}"#).unwrap();
        let changed = patch.apply(&mut defect);
        assert_eq!(changed, vec!["title"]);
        assert_eq!(defect.assignee, Some("user_bob".into()));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut defect = sample_defect();
        let before = defect.clone();
        assert!(DefectPatch::default().apply(&mut defect).is_empty());
        assert_eq!(defect, before);
    }

    #[test]
    fn patch_deserializes_from_camel_case() {
        let patch: DefectPatch =
            serde_json::from_str(r#"{"priority":"High","dueDate":"2026-04-01T00:00:00Z"}"#)
                .unwrap();
        assert_eq!(patch.priority, Some(DefectPriority::High));
        assert!(patch.due_date.is_some());
        assert!(patch.title.is_none());
    }

    #[test]
    fn defect_serializes_camel_case() {
        let defect = sample_defect();
        let value = serde_json::to_value(&defect).unwrap();
        assert_eq!(value["projectId"], "prj-0000000000000001");
        assert_eq!(value["status"], "New");
        assert_eq!(value["createdBy"], "user_creator");
        assert!(value["comments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn defect_with_missing_comments_deserializes_empty() {
        let raw = r#"{
            "id": "def-00000000000000aa",
            "title": "t",
            "description": null,
            "priority": "Low",
            "assignee": null,
            "projectId": "prj-00000000000000aa",
            "dueDate": null,
            "status": "New",
            "createdBy": "user_x",
            "createdAt": "2026-03-01T10:00:00Z",
            "updatedAt": "2026-03-01T10:00:00Z"
        }"#;
        let defect: Defect = serde_json::from_str(raw).unwrap();
        assert!(defect.comments.is_empty());
    }
}
