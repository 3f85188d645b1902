//! Ranking order tests.

use sitedex::search::DEFAULT_RESULT_LIMIT;
use sitedex::types::{DocKind, RankedResult};

use crate::common::{engine_for, make_dated_document, make_document};

#[test]
fn test_edge_router_scenario() {
    let mut doc = make_document("Edge Router", DocKind::Project);
    doc.tags = vec!["networking".to_string()];
    let engine = engine_for(vec![doc]);

    assert_eq!(engine.index()["edge"], vec![0]);
    assert_eq!(engine.index()["router"], vec![0]);
    assert_eq!(engine.index()["networking"], vec![0]);

    let results = engine.search("edge", DEFAULT_RESULT_LIMIT);
    assert_eq!(results.len(), 1);
    assert_eq!(engine.item(results[0].position).unwrap().title, "Edge Router");
}

#[test]
fn test_long_token_breaks_short_token_tie() {
    // "mesh" (4 chars) is in both; "overlay" (7 chars) only in B
    let a = make_document("Mesh basics", DocKind::LabNote);
    let b = make_document("Mesh overlay", DocKind::LabNote);
    let engine = engine_for(vec![a, b]);

    let results = engine.search("mesh overlay", DEFAULT_RESULT_LIMIT);
    assert_eq!(
        results,
        vec![
            RankedResult { position: 1, score: 3 },
            RankedResult { position: 0, score: 1 },
        ]
    );
}

#[test]
fn test_score_outranks_date() {
    let new_weak = make_dated_document("Router", DocKind::Project, "2024-01-01");
    let mut old_strong = make_dated_document("Router router build", DocKind::Project, "2020-01-01");
    old_strong.tags = vec!["firmware".to_string()];
    let engine = engine_for(vec![new_weak, old_strong]);

    let results = engine.search("router firmware", DEFAULT_RESULT_LIMIT);
    assert_eq!(results[0].position, 1);
    assert_eq!(results[0].score, 4);
}

#[test]
fn test_date_tie_break() {
    let engine = engine_for(vec![
        make_dated_document("Shared unparseable", DocKind::LabNote, "yesterday"),
        make_dated_document("Shared older", DocKind::LabNote, "2023-01-01"),
        make_document("Shared undated", DocKind::LabNote),
        make_dated_document("Shared newer", DocKind::LabNote, "2024-01-01"),
    ]);

    let titles: Vec<&str> = engine
        .search_items("shared", DEFAULT_RESULT_LIMIT)
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    // Undated and unparseable both sort as the epoch, then by position
    assert_eq!(
        titles,
        vec!["Shared newer", "Shared older", "Shared unparseable", "Shared undated"]
    );
}

#[test]
fn test_repeated_query_tokens_count_twice() {
    let engine = engine_for(vec![make_document("Kernel", DocKind::Project)]);
    assert_eq!(engine.search("kernel", 20)[0].score, 2);
    assert_eq!(engine.search("kernel kernel", 20)[0].score, 4);
}

#[test]
fn test_query_is_tokenized_like_the_index() {
    let engine = engine_for(vec![make_document("k3s-on-arm", DocKind::Project)]);
    assert_eq!(engine.search("K3S!", 20).len(), 1);
    assert_eq!(engine.search("on_arm", 20).len(), 1);
}

#[test]
fn test_punctuation_only_query() {
    let engine = engine_for(vec![make_document("Edge Router", DocKind::Project)]);
    assert!(engine.search("??", DEFAULT_RESULT_LIMIT).is_empty());
    assert!(engine.search("-- !! ..", DEFAULT_RESULT_LIMIT).is_empty());
}

#[test]
fn test_unknown_token_matches_nothing() {
    let engine = engine_for(vec![make_document("Edge Router", DocKind::Project)]);
    assert!(engine.search("zebra", DEFAULT_RESULT_LIMIT).is_empty());
}

#[test]
fn test_result_cap() {
    let docs = (0..50)
        .map(|i| make_document(&format!("Runbook {}", i), DocKind::LabNote))
        .collect();
    let engine = engine_for(docs);
    assert_eq!(engine.rank("runbook").len(), 50);
    assert_eq!(engine.search("runbook", DEFAULT_RESULT_LIMIT).len(), 20);
    assert_eq!(engine.search("runbook", 5).len(), 5);
    assert!(engine.search("runbook", 0).is_empty());
}

#[test]
fn test_kind_token_filters() {
    let engine = engine_for(vec![
        make_document("Alpha", DocKind::Project),
        make_document("Beta", DocKind::LabNote),
        make_document("Gamma", DocKind::LabNote),
    ]);
    let positions: Vec<usize> = engine.search("note", 20).iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2]);
    // "lab" is not indexed, so the split form still finds only notes
    let positions: Vec<usize> = engine.search("lab-note", 20).iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2]);
    let positions: Vec<usize> = engine.search("project", 20).iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![0]);
}
