//! Request usage counters.
//!
//! Counts inbound requests per `"VERB path"` key. Keys are the literal
//! concatenation of method and request path: trailing slashes and query
//! strings are deliberately not normalised, so `/api/pois` and `/api/pois/`
//! count separately. The whole mapping is persisted after every increment,
//! consistent with the store's whole-unit policy. Counter failures never
//! fail the request being counted.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::document::Document;
use crate::domain::ports::{CollectionId, DocumentStore};

/// Handle over the persisted usage counters.
#[derive(Clone)]
pub struct UsageCounters {
    store: Arc<dyn DocumentStore>,
}

impl UsageCounters {
    /// Bind the counters to a store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn counts(&self) -> Map<String, Value> {
        let unit = self.store.load(CollectionId::UsageCounters).await;
        if unit.recovered {
            warn!("usage counters were unreadable; restarting from zero");
        }
        match unit.value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Count one request for the literal `"{verb} {path}"` key.
    pub async fn increment(&self, verb: &str, path: &str) {
        let mut counts = self.counts().await;
        let key = format!("{verb} {path}");
        let next = counts.get(&key).and_then(Value::as_u64).unwrap_or(0) + 1;
        counts.insert(key, Value::from(next));
        if let Err(error) = self
            .store
            .save(CollectionId::UsageCounters, &Value::Object(counts))
            .await
        {
            warn!(%error, "usage counter persistence failed");
        }
    }

    /// Current counts.
    pub async fn snapshot(&self) -> Document {
        self.counts().await
    }
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
