//! Hydrophone snapshot and history services.
//!
//! The snapshot is a single living document overwritten wholesale on each
//! update; the history collection is its durable, multi-entry counterpart.
//! Validation is deliberately forgiving: only `longitude`/`latitude` are
//! required, every other field is individually coerced to a per-field default
//! when absent or mistyped.
//!
//! `send` applies one history record to the snapshot. It is the one operation
//! touching two collections in a single logical step and is not atomic across
//! them: a failure between the two persists can leave the snapshot updated
//! without the record's `sentAt` reflecting it. Retrying is safe because the
//! history record id is the idempotency key — a re-send simply re-applies.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::warn;
use uuid::Uuid;

use crate::domain::DomainResult;
use crate::domain::audit::AuditLog;
use crate::domain::collection::{Collection, storage_failure};
use crate::domain::document::{
    Document, as_document, document_id, now_rfc3339, number_or_null, require_number, string_or,
};
use crate::domain::error::DomainError;
use crate::domain::ports::{CollectionId, DocumentStore};
use crate::domain::route::sort_newest_first;

/// Placeholder label for history records created without a name.
pub const UNNAMED_READING: &str = "Unnamed reading";

/// Service over the hydrophone snapshot and history collections.
#[derive(Clone)]
pub struct HydrophoneService {
    store: Arc<dyn DocumentStore>,
    history: Collection,
    audit: AuditLog,
}

impl HydrophoneService {
    /// Wire the service to a store and the audit log.
    pub fn new(store: Arc<dyn DocumentStore>, audit: AuditLog) -> Self {
        Self {
            history: Collection::new(store.clone(), CollectionId::HydroHistory),
            store,
            audit,
        }
    }

    /// The current snapshot; an empty object when never written.
    pub async fn latest(&self) -> Document {
        let unit = self.store.load(CollectionId::HydrophoneSnapshot).await;
        if unit.recovered {
            warn!("hydrophone snapshot was unreadable; continuing from an empty default");
        }
        match unit.value {
            Value::Object(map) => map,
            _ => Document::new(),
        }
    }

    /// Overwrite the snapshot wholesale from `input`.
    pub async fn update_snapshot(&self, input: Value) -> DomainResult<()> {
        let input = as_document(input)?;
        let snapshot = coerce_reading(&input, &now_rfc3339())?;
        self.save_snapshot(&snapshot).await?;
        self.audit
            .append("hydro.updated", json!({"timestamp": snapshot.get("timestamp")}))
            .await;
        Ok(())
    }

    /// All history records, newest first.
    pub async fn history(&self) -> Vec<Document> {
        let mut documents = self.history.documents().await;
        sort_newest_first(&mut documents);
        documents
    }

    /// Validate `input` and persist a new history record.
    ///
    /// `name` falls back to a placeholder label; `sentAt` starts null and is
    /// only stamped when the record is applied to the snapshot.
    pub async fn record_history(&self, input: Value) -> DomainResult<Document> {
        let input = as_document(input)?;
        let now = now_rfc3339();
        let reading = coerce_reading(&input, &now)?;

        let mut doc = Document::new();
        doc.insert("id".into(), json!(Uuid::new_v4().to_string()));
        doc.insert("name".into(), name_or_placeholder(&input));
        for (key, value) in reading {
            doc.insert(key, value);
        }
        doc.insert("createdAt".into(), json!(now));
        doc.insert("sentAt".into(), Value::Null);

        let created = self.history.insert(doc).await?;
        self.audit
            .append(
                "hydro.history.created",
                json!({"id": document_id(&created), "name": created.get("name")}),
            )
            .await;
        Ok(created)
    }

    /// Delete a history record by id.
    pub async fn delete_history(&self, id: &str) -> DomainResult<()> {
        self.history.remove(id).await?;
        self.audit
            .append("hydro.history.deleted", json!({"id": id}))
            .await;
        Ok(())
    }

    /// Apply the history record with `id` to the snapshot.
    ///
    /// The snapshot takes the record's reading fields with a freshly generated
    /// `timestamp` — sending re-stamps time-of-application, decoupling it from
    /// the recorded observation time. The record's `sentAt` is stamped with
    /// the same instant. Returns the applied snapshot.
    pub async fn send(&self, id: &str) -> DomainResult<Document> {
        let mut records = self.history.documents().await;
        let record = records
            .iter_mut()
            .find(|doc| document_id(doc) == Some(id))
            .ok_or_else(|| DomainError::not_found(format!("no history record {id}")))?;

        let applied_at = now_rfc3339();
        let snapshot = coerce_reading(record, &applied_at)
            .map(|mut reading| {
                reading.insert("timestamp".into(), json!(applied_at));
                reading
            })
            .map_err(|_| DomainError::internal(format!("history record {id} is malformed")))?;

        // Two-phase: snapshot first, then the sentAt stamp. A failure in
        // between leaves the snapshot applied but the record unstamped.
        self.save_snapshot(&snapshot).await?;
        record.insert("sentAt".into(), json!(applied_at));
        self.history.replace(records).await?;

        self.audit
            .append("hydro.sent", json!({"id": id, "timestamp": applied_at}))
            .await;
        Ok(snapshot)
    }

    async fn save_snapshot(&self, snapshot: &Document) -> DomainResult<()> {
        self.store
            .save(
                CollectionId::HydrophoneSnapshot,
                &Value::Object(snapshot.clone()),
            )
            .await
            .map_err(|err| storage_failure(&err))
    }
}

/// Coerce a raw payload into the snapshot field set.
///
/// `longitude`/`latitude` are required numbers; the remaining fields default
/// individually (null for missing readings, `false` for `shipDetected`, `""`
/// for `shipType`, `default_timestamp` for `timestamp`) instead of being
/// rejected.
fn coerce_reading(input: &Document, default_timestamp: &str) -> Result<Document, DomainError> {
    let mut reading = Document::new();
    reading.insert("longitude".into(), require_number(input, "longitude")?);
    reading.insert("latitude".into(), require_number(input, "latitude")?);
    for key in ["heading", "temperature", "humidity", "pressure", "salinity"] {
        reading.insert(key.into(), number_or_null(input, key));
    }
    reading.insert(
        "shipDetected".into(),
        json!(
            input
                .get("shipDetected")
                .and_then(Value::as_bool)
                .unwrap_or(false)
        ),
    );
    reading.insert("shipType".into(), string_or(input, "shipType", ""));
    reading.insert(
        "timestamp".into(),
        string_or(input, "timestamp", default_timestamp),
    );
    Ok(reading)
}

fn name_or_placeholder(input: &Document) -> Value {
    match input.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => json!(name),
        _ => json!(UNNAMED_READING),
    }
}

#[cfg(test)]
#[path = "hydrophone_tests.rs"]
mod tests;
