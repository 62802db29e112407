//! Tests for the flat-file JSON store.

use serde_json::json;
use tempfile::TempDir;

use super::*;

fn store() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonFileStore::new(dir.path());
    (dir, store)
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let (_dir, store) = store();
    let value = json!([{"id": "a", "name": "Pier"}]);

    store
        .save(CollectionId::Pois, &value)
        .await
        .expect("save");
    let loaded = store.load(CollectionId::Pois).await;

    assert_eq!(loaded.value, value);
    assert!(!loaded.recovered);
}

#[tokio::test]
async fn missing_file_loads_the_empty_default_unflagged() {
    let (_dir, store) = store();

    let list = store.load(CollectionId::Routes).await;
    assert_eq!(list.value, json!([]));
    assert!(!list.recovered);

    let snapshot = store.load(CollectionId::HydrophoneSnapshot).await;
    assert_eq!(snapshot.value, json!({}));
    assert!(!snapshot.recovered);
}

#[tokio::test]
async fn corrupt_file_recovers_to_the_empty_default() {
    let (dir, store) = store();
    std::fs::write(dir.path().join("pois.json"), b"{not json").expect("write corrupt file");

    let loaded = store.load(CollectionId::Pois).await;
    assert_eq!(loaded.value, json!([]));
    assert!(loaded.recovered);
}

#[tokio::test]
async fn save_overwrites_in_full() {
    let (_dir, store) = store();
    store
        .save(CollectionId::Logs, &json!([{"id": "1"}, {"id": "2"}]))
        .await
        .expect("first save");
    store
        .save(CollectionId::Logs, &json!([{"id": "3"}]))
        .await
        .expect("second save");

    assert_eq!(store.load(CollectionId::Logs).await.value, json!([{"id": "3"}]));
}

#[tokio::test]
async fn collections_persist_as_independent_files() {
    let (dir, store) = store();
    store
        .save(CollectionId::Pois, &json!([]))
        .await
        .expect("save pois");
    store
        .save(CollectionId::UsageCounters, &json!({"GET /api/pois": 1}))
        .await
        .expect("save counters");

    assert!(dir.path().join("pois.json").exists());
    assert!(dir.path().join("usage-counters.json").exists());
    assert!(!dir.path().join("pois.json.tmp").exists());
}

#[tokio::test]
async fn unwritable_directory_surfaces_a_write_error() {
    let file_as_dir = TempDir::new().expect("temp dir");
    let blocking_file = file_as_dir.path().join("data");
    std::fs::write(&blocking_file, b"").expect("create blocking file");

    let store = JsonFileStore::new(&blocking_file);
    let error = store
        .save(CollectionId::Pois, &json!([]))
        .await
        .expect_err("cannot create dir under a file");
    assert!(matches!(error, StoreError::Write { .. }));
}
