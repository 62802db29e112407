//! Point-of-interest collection service.
//!
//! Validates create payloads, assigns identifiers, and drives the document
//! store read-modify-write cycle. Listing sorts ascending by name; sorting is
//! a query-time projection, not a storage-level property.

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::audit::AuditLog;
use crate::domain::collection::Collection;
use crate::domain::document::{
    Document, array_or_empty, as_document, document_id, require_name, require_number, string_or,
};
use crate::domain::ports::{CollectionId, DocumentStore};
use crate::domain::DomainResult;

/// Service over the `pois` collection.
#[derive(Clone)]
pub struct PoiService {
    collection: Collection,
    audit: AuditLog,
}

impl PoiService {
    /// Wire the service to a store and the audit log.
    pub fn new(store: Arc<dyn DocumentStore>, audit: AuditLog) -> Self {
        Self {
            collection: Collection::new(store, CollectionId::Pois),
            audit,
        }
    }

    /// All points of interest, ascending by name.
    pub async fn list(&self) -> Vec<Document> {
        let mut documents = self.collection.documents().await;
        documents.sort_by(|a, b| name_of(a).cmp(name_of(b)));
        documents
    }

    /// Validate `input` and persist a new point of interest.
    ///
    /// Requires a non-empty `name` and numeric `lng`/`lat`; `address` and
    /// `tags` default to `""` and `[]`.
    pub async fn create(&self, input: Value) -> DomainResult<Document> {
        let input = as_document(input)?;
        let name = require_name(&input, "name")?;
        let lng = require_number(&input, "lng")?;
        let lat = require_number(&input, "lat")?;

        let mut doc = Document::new();
        doc.insert("id".into(), json!(Uuid::new_v4().to_string()));
        doc.insert("name".into(), json!(name));
        doc.insert("lng".into(), lng);
        doc.insert("lat".into(), lat);
        doc.insert("address".into(), string_or(&input, "address", ""));
        doc.insert("tags".into(), array_or_empty(&input, "tags"));

        let created = self.collection.insert(doc).await?;
        self.audit
            .append(
                "poi.created",
                json!({"id": document_id(&created), "name": name}),
            )
            .await;
        Ok(created)
    }

    /// Shallow field-level patch of an existing point of interest.
    pub async fn update(&self, id: &str, patch: Value) -> DomainResult<Document> {
        let patch = as_document(patch)?;
        let updated = self.collection.patch(id, patch).await?;
        self.audit.append("poi.updated", json!({"id": id})).await;
        Ok(updated)
    }

    /// Delete a point of interest by id.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.collection.remove(id).await?;
        self.audit.append("poi.deleted", json!({"id": id})).await;
        Ok(())
    }
}

/// Name projection used for sorting; unnamed documents sort first.
pub(crate) fn name_of(doc: &Document) -> &str {
    doc.get("name").and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
#[path = "poi_tests.rs"]
mod tests;
