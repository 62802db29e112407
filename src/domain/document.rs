//! Document primitives shared by every collection.
//!
//! A document is a flat JSON object; collections are ordered sequences of
//! documents persisted as one unit. Helpers here cover the pieces every
//! service needs: identifier access, the shallow field-level merge used by
//! partial updates, timestamp formatting, and soft field extraction.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// A self-contained record: a mapping from field name to JSON value.
pub type Document = Map<String, Value>;

/// Wire name of the identifier field carried by list-shaped collections.
pub const ID_FIELD: &str = "id";

/// Borrow a document's identifier, if it carries one.
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

/// Shallow field-level patch: keys present in `patch` overwrite the target,
/// absent keys are left untouched. The identifier is immutable and any `id`
/// key in the patch is discarded.
pub fn merge_patch(doc: &mut Document, patch: Document) {
    for (key, value) in patch {
        if key == ID_FIELD {
            continue;
        }
        doc.insert(key, value);
    }
}

/// Current instant formatted the way every persisted timestamp is stored.
///
/// Millisecond precision with a `Z` suffix keeps the representation uniform,
/// so lexicographic ordering of stored timestamps is chronological.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored timestamp, falling back to the epoch for foreign values.
pub fn parse_timestamp(value: Option<&Value>) -> DateTime<Utc> {
    value
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Require `key` to be a non-empty string, trimmed of surrounding whitespace.
pub fn require_name(input: &Document, key: &str) -> Result<String, DomainError> {
    input
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| DomainError::invalid_request("Invalid payload"))
}

/// Require `key` to be a JSON number, keeping the raw value so inputs
/// round-trip without float re-encoding.
pub fn require_number(input: &Document, key: &str) -> Result<Value, DomainError> {
    input
        .get(key)
        .filter(|value| value.is_number())
        .cloned()
        .ok_or_else(|| DomainError::invalid_request("Invalid payload"))
}

/// Optional string field with a caller-supplied default.
pub fn string_or(input: &Document, key: &str, default: &str) -> Value {
    match input.get(key) {
        Some(Value::String(text)) => Value::String(text.clone()),
        _ => Value::String(default.to_owned()),
    }
}

/// Optional array field, defaulting to an empty array.
pub fn array_or_empty(input: &Document, key: &str) -> Value {
    match input.get(key) {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        _ => Value::Array(Vec::new()),
    }
}

/// Optional numeric field, coerced to null when absent or mistyped.
pub fn number_or_null(input: &Document, key: &str) -> Value {
    match input.get(key) {
        Some(value) if value.is_number() => value.clone(),
        _ => Value::Null,
    }
}

/// Interpret an arbitrary payload as a document, rejecting non-objects.
pub fn as_document(payload: Value) -> Result<Document, DomainError> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(DomainError::invalid_request("Invalid payload")),
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
