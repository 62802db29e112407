//! Domain services and primitives.
//!
//! Purpose: implement the record-keeping core — a document store port layered
//! under independent collections, entity services with soft validation, an
//! append-only audit log, and request usage counters. Transport concerns stay
//! in the inbound adapter; durable storage stays behind [`ports::DocumentStore`].

pub mod attraction;
pub mod audit;
pub mod collection;
pub mod document;
pub mod error;
pub mod hydrophone;
pub mod poi;
pub mod ports;
pub mod route;
pub mod usage;

pub use self::attraction::AttractionService;
pub use self::audit::{AUDIT_LOG_CAP, AuditLog};
pub use self::collection::Collection;
pub use self::document::Document;
pub use self::error::{DomainError, ErrorCode};
pub use self::hydrophone::HydrophoneService;
pub use self::poi::PoiService;
pub use self::ports::{CollectionId, DocumentStore, LoadedUnit, StoreError};
pub use self::route::RouteService;
pub use self::usage::UsageCounters;

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
