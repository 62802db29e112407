//! Domain ports defining the edge towards durable storage.
//!
//! The document store operates at whole-collection granularity: `load` hands
//! back the entire persisted unit, `save` overwrites it in full. There is no
//! row-level access and no concurrency token; the last writer to finish a
//! read-modify-write cycle wins. Adapters expose strongly typed errors so
//! callers can surface write failures instead of losing them.

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Identifier of one persisted record-set.
///
/// Each variant maps to a self-contained, independently loadable unit of
/// storage (one JSON file in the shipped adapter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionId {
    /// Points of interest.
    Pois,
    /// Walking/boating routes.
    Routes,
    /// Visitor attractions.
    Attractions,
    /// The singleton current hydrophone reading.
    HydrophoneSnapshot,
    /// Durable multi-entry hydrophone history.
    HydroHistory,
    /// Append-only audit log.
    Logs,
    /// Request usage counters.
    UsageCounters,
}

impl CollectionId {
    /// Stable storage name for the collection.
    pub fn storage_name(self) -> &'static str {
        match self {
            Self::Pois => "pois",
            Self::Routes => "routes",
            Self::Attractions => "attractions",
            Self::HydrophoneSnapshot => "hydrophone-snapshot",
            Self::HydroHistory => "hydro-history",
            Self::Logs => "logs",
            Self::UsageCounters => "usage-counters",
        }
    }

    /// Safe default substituted when the underlying storage is missing or
    /// unreadable: an empty object for snapshot-shaped units, an empty array
    /// for list-shaped ones.
    pub fn empty_default(self) -> Value {
        match self {
            Self::HydrophoneSnapshot | Self::UsageCounters => Value::Object(Map::new()),
            _ => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}

/// Result of loading one collection.
#[derive(Debug, Clone)]
pub struct LoadedUnit {
    /// The persisted value, or the collection's empty default.
    pub value: Value,
    /// True when the stored unit existed but could not be read and an empty
    /// default was substituted. A missing unit (first boot) is not flagged.
    pub recovered: bool,
}

impl LoadedUnit {
    /// A unit read back verbatim from storage.
    pub fn intact(value: Value) -> Self {
        Self {
            value,
            recovered: false,
        }
    }

    /// The empty default for a collection that has never been written.
    pub fn absent(collection: CollectionId) -> Self {
        Self {
            value: collection.empty_default(),
            recovered: false,
        }
    }

    /// The empty default substituted for an unreadable unit.
    pub fn recovered(collection: CollectionId) -> Self {
        Self {
            value: collection.empty_default(),
            recovered: true,
        }
    }
}

/// Errors surfaced by the storage adapter when persisting a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collection could not be encoded for storage.
    #[error("failed to encode collection {collection}: {message}")]
    Serialization {
        /// Collection being persisted.
        collection: CollectionId,
        /// Adapter-provided failure description.
        message: String,
    },
    /// The durable write itself failed.
    #[error("failed to write collection {collection}: {message}")]
    Write {
        /// Collection being persisted.
        collection: CollectionId,
        /// Adapter-provided failure description.
        message: String,
    },
}

impl StoreError {
    /// Helper for encoding failures.
    pub fn serialization(collection: CollectionId, message: impl Into<String>) -> Self {
        Self::Serialization {
            collection,
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(collection: CollectionId, message: impl Into<String>) -> Self {
        Self::Write {
            collection,
            message: message.into(),
        }
    }
}

/// Whole-unit persistence port.
///
/// `load` never fails: a missing or unreadable unit yields the collection's
/// empty default, with [`LoadedUnit::recovered`] distinguishing a healed
/// corruption from a genuinely empty collection so callers can log it.
/// `save` always overwrites in full and must produce deterministically
/// re-readable output. The port is not safe against concurrent writers; that
/// is a documented limitation of the design, not a feature.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the current persisted unit for `collection`.
    async fn load(&self, collection: CollectionId) -> LoadedUnit;

    /// Overwrite the persisted unit for `collection` in full.
    async fn save(&self, collection: CollectionId, value: &Value) -> Result<(), StoreError>;
}
