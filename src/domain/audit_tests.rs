//! Tests for the bounded audit log.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::test_support::MemoryStore;

fn audit(store: &Arc<MemoryStore>) -> AuditLog {
    AuditLog::new(store.clone() as Arc<dyn DocumentStore>)
}

#[tokio::test]
async fn entries_are_most_recent_first() {
    let store = Arc::new(MemoryStore::new());
    let log = audit(&store);

    log.append("poi.created", json!({"id": "a"})).await;
    log.append("poi.deleted", json!({"id": "a"})).await;

    let entries = log.entries().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].get("type"), Some(&json!("poi.deleted")));
    assert_eq!(entries[1].get("type"), Some(&json!("poi.created")));
    assert!(entries[0].get("id").is_some());
    assert!(entries[0].get("ts").is_some());
}

#[tokio::test]
async fn appending_past_the_cap_evicts_the_oldest() {
    let store = Arc::new(MemoryStore::new());
    // Seed a full log directly; appending one-by-one would rewrite the
    // whole unit 500 times for no extra coverage.
    let seeded: Vec<_> = (0..AUDIT_LOG_CAP)
        .map(|n| json!({"id": n.to_string(), "type": "seed", "detail": {}, "ts": ""}))
        .collect();
    store.seed(CollectionId::Logs, json!(seeded));
    let log = audit(&store);

    log.append("poi.created", json!({"id": "new"})).await;

    let entries = log.entries().await;
    assert_eq!(entries.len(), AUDIT_LOG_CAP);
    assert_eq!(entries[0].get("type"), Some(&json!("poi.created")));
    // The oldest seeded entry is gone.
    assert_eq!(
        entries[AUDIT_LOG_CAP - 1].get("id"),
        Some(&json!((AUDIT_LOG_CAP - 2).to_string()))
    );
}

#[tokio::test]
async fn append_failures_are_swallowed() {
    let store = Arc::new(MemoryStore::new());
    store.fail_writes();
    let log = audit(&store);
    // Must not panic or propagate.
    log.append("poi.created", json!({})).await;
    assert!(log.entries().await.is_empty());
}
