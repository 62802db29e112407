//! Flat-file JSON implementation of the document store port.
//!
//! One pretty-printed JSON file per collection under a data directory. Writes
//! go to a temporary sibling and are renamed into place, and a store-wide
//! mutex serialises them, so a single write is never observed torn. The
//! read-modify-write cycle above this adapter remains unsynchronised: two
//! concurrent cycles over one collection can still lose an update, which the
//! domain documents as an accepted limitation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::ports::{CollectionId, DocumentStore, LoadedUnit, StoreError};

/// Document store persisting each collection as `<data_dir>/<name>.json`.
pub struct JsonFileStore {
    data_dir: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir`; the directory is created lazily
    /// on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_guard: Mutex::new(()),
        }
    }

    /// Directory holding the collection files.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    fn path_for(&self, collection: CollectionId) -> PathBuf {
        self.data_dir
            .join(format!("{}.json", collection.storage_name()))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, collection: CollectionId) -> LoadedUnit {
        let path = self.path_for(collection);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return LoadedUnit::absent(collection);
            }
            Err(error) => {
                warn!(%collection, %error, "collection file unreadable");
                return LoadedUnit::recovered(collection);
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => LoadedUnit::intact(value),
            Err(error) => {
                warn!(%collection, %error, "collection file corrupt");
                LoadedUnit::recovered(collection)
            }
        }
    }

    async fn save(&self, collection: CollectionId, value: &Value) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(value)
            .map_err(|err| StoreError::serialization(collection, err.to_string()))?;

        let _guard = self.write_guard.lock().await;
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|err| StoreError::write(collection, err.to_string()))?;

        let path = self.path_for(collection);
        let staging = self
            .data_dir
            .join(format!("{}.json.tmp", collection.storage_name()));
        fs::write(&staging, &encoded)
            .await
            .map_err(|err| StoreError::write(collection, err.to_string()))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|err| StoreError::write(collection, err.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_store_tests.rs"]
mod tests;
