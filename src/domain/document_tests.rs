//! Tests for document helpers.

use rstest::rstest;
use serde_json::{Value, json};

use super::*;

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn merge_patch_overwrites_only_present_fields() {
    let mut target = doc(json!({"id": "a", "name": "Pier", "tags": []}));
    merge_patch(&mut target, doc(json!({"tags": ["park"]})));
    assert_eq!(target.get("name"), Some(&json!("Pier")));
    assert_eq!(target.get("tags"), Some(&json!(["park"])));
}

#[test]
fn merge_patch_never_reassigns_the_id() {
    let mut target = doc(json!({"id": "a", "name": "Pier"}));
    merge_patch(&mut target, doc(json!({"id": "b", "name": "Quay"})));
    assert_eq!(target.get("id"), Some(&json!("a")));
    assert_eq!(target.get("name"), Some(&json!("Quay")));
}

#[test]
fn merge_patch_keeps_explicit_nulls() {
    let mut target = doc(json!({"id": "a", "desc": "old"}));
    merge_patch(&mut target, doc(json!({"desc": null})));
    assert_eq!(target.get("desc"), Some(&Value::Null));
}

#[rstest]
#[case::missing(json!({}))]
#[case::empty(json!({"name": ""}))]
#[case::blank(json!({"name": "   "}))]
#[case::wrong_type(json!({"name": 7}))]
fn require_name_rejects_unusable_values(#[case] input: Value) {
    assert!(require_name(&doc(input), "name").is_err());
}

#[test]
fn require_name_trims_whitespace() {
    let input = doc(json!({"name": "  Pier  "}));
    assert_eq!(require_name(&input, "name").expect("valid name"), "Pier");
}

#[rstest]
#[case::missing(json!({}))]
#[case::string(json!({"lng": "120.1"}))]
#[case::null(json!({"lng": null}))]
fn require_number_rejects_non_numbers(#[case] input: Value) {
    assert!(require_number(&doc(input), "lng").is_err());
}

#[test]
fn require_number_round_trips_the_raw_value() {
    let input = doc(json!({"lng": 120.1}));
    assert_eq!(
        require_number(&input, "lng").expect("numeric"),
        json!(120.1)
    );
}

#[test]
fn optional_helpers_apply_defaults() {
    let input = doc(json!({"tags": "oops"}));
    assert_eq!(string_or(&input, "address", ""), json!(""));
    assert_eq!(array_or_empty(&input, "tags"), json!([]));
    assert_eq!(number_or_null(&input, "lat"), Value::Null);
}

#[test]
fn timestamps_sort_lexicographically() {
    let older = "2026-08-29T10:00:00.000Z";
    let newer = now_rfc3339();
    assert!(newer.as_str() > older);
    assert!(parse_timestamp(Some(&json!(newer))) > parse_timestamp(Some(&json!(older))));
}

#[test]
fn parse_timestamp_falls_back_to_epoch() {
    assert_eq!(parse_timestamp(None), chrono::DateTime::UNIX_EPOCH);
    assert_eq!(
        parse_timestamp(Some(&json!("not-a-date"))),
        chrono::DateTime::UNIX_EPOCH
    );
}

#[test]
fn as_document_rejects_non_objects() {
    assert!(as_document(json!(["list"])).is_err());
    assert!(as_document(json!({"ok": true})).is_ok());
}
