//! Same payload, same query, same answer.

use sitedex::search::QueryEngine;
use sitedex::types::DocKind;

use crate::common::{engine_for, make_dated_document, make_document, make_payload, payload_json};

fn corpus() -> Vec<sitedex::types::Document> {
    (0..40)
        .map(|i| {
            let title = format!("Shared title {} {}", i % 5, i % 3);
            if i % 4 == 0 {
                make_document(&title, DocKind::Project)
            } else {
                make_dated_document(&title, DocKind::LabNote, &format!("2024-01-{:02}", (i % 28) + 1))
            }
        })
        .collect()
}

#[test]
fn test_repeated_queries_identical() {
    let engine = engine_for(corpus());
    for query in ["shared", "title 3", "shared 0 1", "??", "title title"] {
        assert_eq!(engine.rank(query), engine.rank(query), "query {:?}", query);
    }
}

#[test]
fn test_engines_from_same_payload_agree() {
    let payload = make_payload(corpus());
    let json = payload_json(&payload);
    let a = QueryEngine::from_payload(payload).unwrap();
    let b = QueryEngine::from_json(&json).unwrap();
    for query in ["shared", "title 2", "4"] {
        assert_eq!(a.rank(query), b.rank(query), "query {:?}", query);
    }
}

#[test]
fn test_full_ties_order_by_position() {
    let docs = (0..10)
        .map(|i| make_document(&format!("Tied {}", i), DocKind::Project))
        .collect();
    let engine = engine_for(docs);
    let positions: Vec<usize> = engine.rank("tied").iter().map(|r| r.position).collect();
    assert_eq!(positions, (0..10).collect::<Vec<_>>());
}
