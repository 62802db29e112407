//! Append-only bounded audit log.
//!
//! Operations record what happened, independent of collection contents. New
//! entries go to the head so `entries()` reads most-recent-first; anything
//! past the cap is evicted oldest-first. Auditing never fails the operation
//! that triggered it: append errors are logged and swallowed.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::warn;
use uuid::Uuid;

use crate::domain::document::now_rfc3339;
use crate::domain::ports::{CollectionId, DocumentStore};

/// Maximum number of retained entries; the oldest are evicted first.
pub const AUDIT_LOG_CAP: usize = 500;

/// Handle over the persisted audit log.
#[derive(Clone)]
pub struct AuditLog {
    store: Arc<dyn DocumentStore>,
}

impl AuditLog {
    /// Bind the audit log to a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Current entries, most recent first.
    pub async fn entries(&self) -> Vec<Value> {
        let unit = self.store.load(CollectionId::Logs).await;
        if unit.recovered {
            warn!("audit log was unreadable; continuing from an empty default");
        }
        match unit.value {
            Value::Array(entries) => entries,
            _ => Vec::new(),
        }
    }

    /// Record an operation of `kind` with a structured detail object.
    ///
    /// The entry is prepended, the log truncated to [`AUDIT_LOG_CAP`], and
    /// the whole unit persisted.
    pub async fn append(&self, kind: &str, detail: Value) {
        let mut entries = self.entries().await;
        entries.insert(
            0,
            json!({
                "id": Uuid::new_v4().to_string(),
                "type": kind,
                "detail": detail,
                "ts": now_rfc3339(),
            }),
        );
        entries.truncate(AUDIT_LOG_CAP);
        if let Err(error) = self
            .store
            .save(CollectionId::Logs, &Value::Array(entries))
            .await
        {
            warn!(%error, kind, "audit append failed");
        }
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
