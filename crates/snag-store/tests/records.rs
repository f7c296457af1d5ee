//! Record-store integration tests.
//!
//! Covers the raw key-value contract (get/set/prefix scan) and the typed
//! per-entity repos against an in-memory store.

use chrono::{DateTime, TimeDelta, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use snag_core::entities::{Comment, Defect, HistoryEntry, Project, User};
use snag_core::enums::{DefectPriority, DefectStatus, HistoryAction, ProjectStatus, Role};
use snag_core::{ids, keys};
use snag_store::SnagStore;

async fn test_store() -> SnagStore {
    SnagStore::open(":memory:").await.unwrap()
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn sample_user(id: &str, role: Role) -> User {
    User {
        id: id.into(),
        email: format!("{id}@example.com"),
        name: id.into(),
        role,
        created_at: ts("2026-02-01T09:00:00Z"),
    }
}

fn sample_defect(id: &str, project_id: &str) -> Defect {
    Defect {
        id: id.into(),
        title: format!("defect {id}"),
        description: None,
        priority: DefectPriority::Medium,
        assignee: None,
        project_id: project_id.into(),
        due_date: None,
        status: DefectStatus::New,
        created_by: "user_creator".into(),
        created_at: ts("2026-02-01T10:00:00Z"),
        updated_at: ts("2026-02-01T10:00:00Z"),
        comments: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Raw key-value contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_absent_key_is_none() {
    let store = test_store().await;
    assert!(store.get("defect:def-none").await.unwrap().is_none());
}

#[tokio::test]
async fn set_then_get_roundtrips() {
    let store = test_store().await;
    let doc = json!({"a": 1, "b": ["x", "y"]});
    store.set("misc:one", &doc).await.unwrap();
    assert_eq!(store.get("misc:one").await.unwrap(), Some(doc));
}

#[tokio::test]
async fn set_overwrites_existing_document() {
    let store = test_store().await;
    store.set("misc:one", &json!({"v": 1})).await.unwrap();
    store.set("misc:one", &json!({"v": 2})).await.unwrap();
    assert_eq!(
        store.get("misc:one").await.unwrap(),
        Some(json!({"v": 2}))
    );
}

#[tokio::test]
async fn prefix_scan_returns_only_matching_kind() {
    let store = test_store().await;
    store.set("defect:def-1", &json!({"id": "def-1"})).await.unwrap();
    store.set("defect:def-2", &json!({"id": "def-2"})).await.unwrap();
    store.set("project:prj-1", &json!({"id": "prj-1"})).await.unwrap();

    let docs = store.get_by_prefix(keys::DEFECT_PREFIX).await.unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d["id"].as_str().unwrap().starts_with("def-")));
}

#[tokio::test]
async fn prefix_scan_has_no_duplicates() {
    let store = test_store().await;
    // Repeated writes to one key stay one record.
    for v in 0..5 {
        store.set("defect:def-1", &json!({"v": v})).await.unwrap();
    }
    let docs = store.get_by_prefix(keys::DEFECT_PREFIX).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["v"], 4);
}

#[tokio::test]
async fn history_prefix_does_not_leak_across_defects() {
    let store = test_store().await;
    store
        .set("history:def-1:hst-a", &json!({"d": "def-1"}))
        .await
        .unwrap();
    store
        .set("history:def-10:hst-b", &json!({"d": "def-10"}))
        .await
        .unwrap();

    let docs = store.get_by_prefix(&keys::history_for("def-1")).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["d"], "def-1");
}

// ---------------------------------------------------------------------------
// Typed repos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_roundtrip_and_listing() {
    let store = test_store().await;
    let alice = sample_user("user_alice", Role::Admin);
    let bob = sample_user("user_bob", Role::Observer);
    store.put_user(&alice).await.unwrap();
    store.put_user(&bob).await.unwrap();

    assert_eq!(store.get_user("user_alice").await.unwrap(), Some(alice));
    assert!(store.get_user("user_nobody").await.unwrap().is_none());
    assert_eq!(store.list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn put_user_overwrites_role() {
    let store = test_store().await;
    let mut bob = sample_user("user_bob", Role::Observer);
    store.put_user(&bob).await.unwrap();
    bob.role = Role::Engineer;
    store.put_user(&bob).await.unwrap();

    let stored = store.get_user("user_bob").await.unwrap().unwrap();
    assert_eq!(stored.role, Role::Engineer);
    assert_eq!(store.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn project_listing() {
    let store = test_store().await;
    let project = Project {
        id: ids::generate(ids::PREFIX_PROJECT),
        name: "Apollo".into(),
        description: Some("Payments rework".into()),
        start_date: Some("2026-02-01".parse().unwrap()),
        end_date: None,
        created_by: "user_alice".into(),
        created_at: ts("2026-02-01T09:30:00Z"),
        status: ProjectStatus::Active,
    };
    store.put_project(&project).await.unwrap();

    let projects = store.list_projects().await.unwrap();
    assert_eq!(projects, vec![project]);
}

#[tokio::test]
async fn defect_roundtrip_preserves_comments() {
    let store = test_store().await;
    let mut defect = sample_defect("def-1", "prj-1");
    defect.comments.push(Comment {
        id: ids::generate(ids::PREFIX_COMMENT),
        author: "user_bob".into(),
        comment: "Reproduced on staging".into(),
        timestamp: ts("2026-02-02T11:00:00Z"),
    });
    store.put_defect(&defect).await.unwrap();

    let stored = store.get_defect("def-1").await.unwrap().unwrap();
    assert_eq!(stored, defect);
    assert_eq!(stored.comments.len(), 1);
}

#[tokio::test]
async fn history_sorted_by_timestamp() {
    let store = test_store().await;
    let base = ts("2026-02-01T10:00:00Z");
    // Append out of chronological order; ids chosen so key order differs too.
    for (id, offset) in [("hst-c", 2), ("hst-a", 0), ("hst-b", 1)] {
        store
            .append_history(&HistoryEntry {
                id: id.into(),
                defect_id: "def-1".into(),
                action: if offset == 0 {
                    HistoryAction::Created
                } else {
                    HistoryAction::Updated
                },
                user_id: "user_alice".into(),
                timestamp: base + TimeDelta::minutes(offset),
                details: None,
            })
            .await
            .unwrap();
    }

    let entries = store.history_for_defect("def-1").await.unwrap();
    let order: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["hst-a", "hst-b", "hst-c"]);
    assert_eq!(entries[0].action, HistoryAction::Created);
}

#[tokio::test]
async fn history_for_unknown_defect_is_empty() {
    let store = test_store().await;
    assert!(store.history_for_defect("def-none").await.unwrap().is_empty());
}
