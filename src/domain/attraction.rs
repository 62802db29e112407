//! Attraction collection service.
//!
//! Attractions are looser than points of interest: only `name` is required,
//! everything else is optional with per-field defaults. Listing sorts
//! ascending by name.

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::DomainResult;
use crate::domain::audit::AuditLog;
use crate::domain::collection::Collection;
use crate::domain::document::{
    Document, array_or_empty, as_document, document_id, number_or_null, require_name, string_or,
};
use crate::domain::poi::name_of;
use crate::domain::ports::{CollectionId, DocumentStore};

/// Service over the `attractions` collection.
#[derive(Clone)]
pub struct AttractionService {
    collection: Collection,
    audit: AuditLog,
}

impl AttractionService {
    /// Wire the service to a store and the audit log.
    pub fn new(store: Arc<dyn DocumentStore>, audit: AuditLog) -> Self {
        Self {
            collection: Collection::new(store, CollectionId::Attractions),
            audit,
        }
    }

    /// All attractions, ascending by name.
    pub async fn list(&self) -> Vec<Document> {
        let mut documents = self.collection.documents().await;
        documents.sort_by(|a, b| name_of(a).cmp(name_of(b)));
        documents
    }

    /// Validate `input` and persist a new attraction.
    ///
    /// Requires a non-empty `name`; `lng`/`lat` default to null and
    /// `address`/`tags`/`desc` to `""`/`[]`/`""`.
    pub async fn create(&self, input: Value) -> DomainResult<Document> {
        let input = as_document(input)?;
        let name = require_name(&input, "name")?;

        let mut doc = Document::new();
        doc.insert("id".into(), json!(Uuid::new_v4().to_string()));
        doc.insert("name".into(), json!(name));
        doc.insert("lng".into(), number_or_null(&input, "lng"));
        doc.insert("lat".into(), number_or_null(&input, "lat"));
        doc.insert("address".into(), string_or(&input, "address", ""));
        doc.insert("tags".into(), array_or_empty(&input, "tags"));
        doc.insert("desc".into(), string_or(&input, "desc", ""));

        let created = self.collection.insert(doc).await?;
        self.audit
            .append(
                "attraction.created",
                json!({"id": document_id(&created), "name": name}),
            )
            .await;
        Ok(created)
    }

    /// Shallow field-level patch of an existing attraction.
    pub async fn update(&self, id: &str, patch: Value) -> DomainResult<Document> {
        let patch = as_document(patch)?;
        let updated = self.collection.patch(id, patch).await?;
        self.audit
            .append("attraction.updated", json!({"id": id}))
            .await;
        Ok(updated)
    }

    /// Delete an attraction by id.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.collection.remove(id).await?;
        self.audit
            .append("attraction.deleted", json!({"id": id}))
            .await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "attraction_tests.rs"]
mod tests;
