//! Route collection service.
//!
//! Routes carry an ordered, non-empty sequence of coordinate pairs and a
//! creation timestamp. Listing sorts descending by `createdAt` so the newest
//! route comes first.

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::DomainResult;
use crate::domain::audit::AuditLog;
use crate::domain::collection::Collection;
use crate::domain::document::{
    Document, as_document, document_id, now_rfc3339, parse_timestamp, require_name,
};
use crate::domain::error::DomainError;
use crate::domain::ports::{CollectionId, DocumentStore};

/// Service over the `routes` collection.
#[derive(Clone)]
pub struct RouteService {
    collection: Collection,
    audit: AuditLog,
}

impl RouteService {
    /// Wire the service to a store and the audit log.
    pub fn new(store: Arc<dyn DocumentStore>, audit: AuditLog) -> Self {
        Self {
            collection: Collection::new(store, CollectionId::Routes),
            audit,
        }
    }

    /// All routes, newest first.
    pub async fn list(&self) -> Vec<Document> {
        let mut documents = self.collection.documents().await;
        sort_newest_first(&mut documents);
        documents
    }

    /// Validate `input` and persist a new route.
    ///
    /// Requires a non-empty `name` and a non-empty `coords` array; the
    /// coordinate pairs themselves are stored as given.
    pub async fn create(&self, input: Value) -> DomainResult<Document> {
        let input = as_document(input)?;
        let name = require_name(&input, "name")?;
        let coords = match input.get("coords") {
            Some(Value::Array(items)) if !items.is_empty() => Value::Array(items.clone()),
            _ => return Err(DomainError::invalid_request("Invalid payload")),
        };

        let mut doc = Document::new();
        doc.insert("id".into(), json!(Uuid::new_v4().to_string()));
        doc.insert("name".into(), json!(name));
        doc.insert("coords".into(), coords);
        doc.insert("createdAt".into(), json!(now_rfc3339()));

        let created = self.collection.insert(doc).await?;
        self.audit
            .append(
                "route.created",
                json!({"id": document_id(&created), "name": name}),
            )
            .await;
        Ok(created)
    }

    /// Shallow field-level patch of an existing route.
    pub async fn update(&self, id: &str, patch: Value) -> DomainResult<Document> {
        let patch = as_document(patch)?;
        let updated = self.collection.patch(id, patch).await?;
        self.audit.append("route.updated", json!({"id": id})).await;
        Ok(updated)
    }

    /// Delete a route by id.
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.collection.remove(id).await?;
        self.audit.append("route.deleted", json!({"id": id})).await;
        Ok(())
    }
}

/// Sort descending by `createdAt`; documents without one sort last.
pub(crate) fn sort_newest_first(documents: &mut [Document]) {
    documents.sort_by(|a, b| {
        parse_timestamp(b.get("createdAt")).cmp(&parse_timestamp(a.get("createdAt")))
    });
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
