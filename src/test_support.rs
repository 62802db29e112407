//! Shared in-memory fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{CollectionId, DocumentStore, LoadedUnit, StoreError};

/// In-memory document store with a toggle to simulate write failures.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<CollectionId, Value>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail with a write error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Seed a collection with an initial value.
    pub fn seed(&self, collection: CollectionId, value: Value) {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .insert(collection, value);
    }

    /// Raw stored value for a collection.
    pub fn raw(&self, collection: CollectionId) -> Option<Value> {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(&collection)
            .cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self, collection: CollectionId) -> LoadedUnit {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(&collection)
            .cloned()
            .map_or_else(|| LoadedUnit::absent(collection), LoadedUnit::intact)
    }

    async fn save(&self, collection: CollectionId, value: &Value) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write(collection, "simulated write failure"));
        }
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .insert(collection, value.clone());
        Ok(())
    }
}
