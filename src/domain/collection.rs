//! Read-modify-write access to one list-shaped collection.
//!
//! Every mutation loads the full sequence, applies the change in memory, and
//! writes the full sequence back. Two near-simultaneous writers can therefore
//! race and the second full rewrite silently discards the first change; that
//! lost-update window is accepted for this workload (single operator, low
//! request rate) and documented on [`crate::domain::ports::DocumentStore`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, warn};

use crate::domain::document::{Document, document_id, merge_patch};
use crate::domain::ports::{CollectionId, DocumentStore, StoreError};
use crate::domain::{DomainError, DomainResult};

/// Handle over one collection behind the document store port.
#[derive(Clone)]
pub struct Collection {
    store: Arc<dyn DocumentStore>,
    id: CollectionId,
}

/// Map a storage failure onto the domain, logging the adapter detail.
pub(crate) fn storage_failure(error: &StoreError) -> DomainError {
    error!(%error, "collection persistence failed");
    DomainError::internal(error.to_string())
}

impl Collection {
    /// Bind a collection identifier to a store.
    pub fn new(store: Arc<dyn DocumentStore>, id: CollectionId) -> Self {
        Self { store, id }
    }

    /// Collection identifier this handle operates on.
    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Load all documents in stored order.
    ///
    /// Non-object entries are dropped and a recovered (previously unreadable)
    /// unit is logged; both cases degrade to fewer documents rather than a
    /// failure.
    pub async fn documents(&self) -> Vec<Document> {
        let unit = self.store.load(self.id).await;
        if unit.recovered {
            warn!(
                collection = %self.id,
                "stored collection was unreadable; continuing from an empty default"
            );
        }
        match unit.value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Persist `documents` as the collection's new full contents.
    pub async fn replace(&self, documents: Vec<Document>) -> DomainResult<()> {
        let value = Value::Array(documents.into_iter().map(Value::Object).collect());
        self.store
            .save(self.id, &value)
            .await
            .map_err(|err| storage_failure(&err))
    }

    /// Append `document` to the collection and persist the whole sequence.
    pub async fn insert(&self, document: Document) -> DomainResult<Document> {
        let mut documents = self.documents().await;
        documents.push(document.clone());
        self.replace(documents).await?;
        Ok(document)
    }

    /// Shallow-merge `patch` onto the document with `id`.
    ///
    /// Fields absent from the patch keep their prior value; the identifier is
    /// immutable. Returns the merged document.
    pub async fn patch(&self, id: &str, patch: Document) -> DomainResult<Document> {
        let mut documents = self.documents().await;
        let target = documents
            .iter_mut()
            .find(|doc| document_id(doc) == Some(id))
            .ok_or_else(|| self.unknown_id(id))?;
        merge_patch(target, patch);
        let merged = target.clone();
        self.replace(documents).await?;
        Ok(merged)
    }

    /// Remove the document with `id`, persisting the shortened sequence.
    pub async fn remove(&self, id: &str) -> DomainResult<()> {
        let documents = self.documents().await;
        let before = documents.len();
        let remaining: Vec<Document> = documents
            .into_iter()
            .filter(|doc| document_id(doc) != Some(id))
            .collect();
        if remaining.len() == before {
            return Err(self.unknown_id(id));
        }
        self.replace(remaining).await
    }

    fn unknown_id(&self, id: &str) -> DomainError {
        DomainError::not_found(format!("no document {id} in {}", self.id))
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
