//! Tests for the route service.

use std::sync::Arc;

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ErrorCode;
use crate::test_support::MemoryStore;

fn service(store: &Arc<MemoryStore>) -> RouteService {
    let store: Arc<dyn DocumentStore> = store.clone();
    RouteService::new(store.clone(), AuditLog::new(store))
}

#[tokio::test]
async fn create_assigns_id_and_created_at() {
    let store = Arc::new(MemoryStore::new());
    let routes = service(&store);

    let created = routes
        .create(json!({"name": "Loop", "coords": [[120.1, 30.2], [120.2, 30.3]]}))
        .await
        .expect("valid payload");

    assert!(document_id(&created).is_some());
    assert_eq!(created.get("name"), Some(&json!("Loop")));
    assert_eq!(
        created.get("coords"),
        Some(&json!([[120.1, 30.2], [120.2, 30.3]]))
    );
    assert!(created.get("createdAt").and_then(Value::as_str).is_some());
}

#[rstest]
#[case::no_coords(json!({"name": "Loop"}))]
#[case::empty_coords(json!({"name": "Loop", "coords": []}))]
#[case::coords_not_a_list(json!({"name": "Loop", "coords": "120,30"}))]
#[case::missing_name(json!({"coords": [[1, 2]]}))]
#[tokio::test]
async fn create_rejects_invalid_payloads(#[case] payload: Value) {
    let store = Arc::new(MemoryStore::new());
    let error = service(&store).create(payload).await.expect_err("invalid");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Invalid payload");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = Arc::new(MemoryStore::new());
    // Seed directly so the createdAt values differ by more than test runtime.
    store.seed(
        CollectionId::Routes,
        json!([
            {"id": "old", "name": "Old", "coords": [[0, 0]], "createdAt": "2026-08-01T00:00:00.000Z"},
            {"id": "new", "name": "New", "coords": [[0, 0]], "createdAt": "2026-08-28T00:00:00.000Z"},
            {"id": "mid", "name": "Mid", "coords": [[0, 0]], "createdAt": "2026-08-14T00:00:00.000Z"},
        ]),
    );

    let ids: Vec<_> = service(&store)
        .list()
        .await
        .iter()
        .filter_map(|doc| document_id(doc).map(str::to_owned))
        .collect();
    assert_eq!(ids, ["new", "mid", "old"]);
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let error = service(&store)
        .delete("missing")
        .await
        .expect_err("unknown id");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
