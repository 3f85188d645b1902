//! Payload validation at the load boundary.

use sitedex::error::PayloadError;
use sitedex::search::QueryEngine;
use sitedex::types::{DocKind, SearchPayload};

const EXAMPLE: &str = r#"{"generatedAt":"2024-01-01T00:00:00.000Z","items":[{"id":"project-foo","type":"project","title":"Foo","url":"/projects/foo/","tags":["infra"],"summary":"...","date":"2024-01-01"}],"index":{"foo":[0],"infra":[0]}}"#;

#[test]
fn test_example_payload_loads() {
    let engine = QueryEngine::from_json(EXAMPLE).unwrap();
    assert_eq!(engine.len(), 1);
    assert_eq!(engine.generated_at(), "2024-01-01T00:00:00.000Z");
    assert_eq!(engine.search("infra", 20)[0].position, 0);
}

#[test]
fn test_missing_index_is_shape_error() {
    let err = QueryEngine::from_json(r#"{"generatedAt":"x","items":[]}"#).unwrap_err();
    assert!(matches!(err, PayloadError::Shape(_)));
    assert!(err.to_string().contains("index"));
}

#[test]
fn test_missing_items_is_shape_error() {
    let err = QueryEngine::from_json(r#"{"generatedAt":"x","index":{}}"#).unwrap_err();
    assert!(matches!(err, PayloadError::Shape(_)));
}

#[test]
fn test_non_json_is_shape_error() {
    for body in ["", "null", "[]", "<!doctype html>", r#"{"items":{},"index":{}}"#] {
        assert!(
            matches!(QueryEngine::from_json(body), Err(PayloadError::Shape(_))),
            "body {:?}",
            body
        );
    }
}

#[test]
fn test_out_of_range_posting_rejected() {
    let json = EXAMPLE.replace(r#""infra":[0]"#, r#""infra":[0,7]"#);
    assert!(matches!(
        QueryEngine::from_json(&json),
        Err(PayloadError::Shape(_))
    ));
}

#[test]
fn test_unvalidated_payload_is_checked_by_engine() {
    let mut payload: SearchPayload = serde_json::from_str(EXAMPLE).unwrap();
    payload.index.insert("ghost".to_string(), vec![1]);
    assert!(QueryEngine::from_payload(payload).is_err());
}

#[test]
fn test_extra_fields_are_ignored() {
    let json = EXAMPLE.replace(r#""generatedAt""#, r#""schema":2,"generatedAt""#);
    assert!(QueryEngine::from_json(&json).is_ok());
}

#[test]
fn test_unknown_item_type_keeps_payload_searchable() {
    let json = r#"{"generatedAt":"x","items":[{"id":"project-foo","type":"project","title":"Foo","url":"/projects/foo/"},{"id":"talk-foo","type":"talk","title":"Foo talk","url":"/talks/foo/"}],"index":{"foo":[0,1],"talk":[1]}}"#;
    let engine = QueryEngine::from_json(json).unwrap();
    assert_eq!(engine.item(1).unwrap().kind, DocKind::Other);
    let positions: Vec<usize> = engine.search("foo", 20).iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![0, 1]);
}
