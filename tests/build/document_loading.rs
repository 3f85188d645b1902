//! Tests for loading entry files.

use sitedex::build::{load_collection, load_entry, NoteEntry, ProjectEntry};
use sitedex::error::BuildDocumentError;

use crate::common::fixture;

#[test]
fn test_load_project_entry() {
    let entry: ProjectEntry = load_entry(&fixture("valid"), "projects/edge-router.json").unwrap();
    assert_eq!(entry.title.as_deref(), Some("Edge Router"));
    assert_eq!(entry.tags, vec!["networking", "homelab"]);
    assert_eq!(entry.origin.entry_slug, "edge-router");
    assert_eq!(entry.origin.source_name, "projects/edge-router.json");
}

#[test]
fn test_load_note_entry() {
    let entry: NoteEntry = load_entry(&fixture("valid"), "notes/wireguard-mesh.json").unwrap();
    assert_eq!(entry.pub_date.as_deref(), Some("2024-05-02"));
    assert_eq!(entry.origin.entry_slug, "wireguard-mesh");
}

#[test]
fn test_load_missing_file() {
    let result: Result<ProjectEntry, _> = load_entry(&fixture("partial"), "projects/missing.json");
    assert!(matches!(result, Err(BuildDocumentError::Read { .. })));
}

#[test]
fn test_load_malformed_json() {
    let result: Result<ProjectEntry, _> = load_entry(&fixture("partial"), "projects/broken.json");
    let err = result.unwrap_err();
    assert!(matches!(err, BuildDocumentError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_load_collection_preserves_order() {
    let files = vec![
        "projects/home-lab.json".to_string(),
        "projects/edge-router.json".to_string(),
    ];
    let loaded = load_collection::<ProjectEntry>(&fixture("valid"), &files);
    let titles: Vec<_> = loaded
        .iter()
        .map(|e| e.as_ref().unwrap().title.clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["Home Lab Cluster", "Edge Router"]);
}

#[test]
fn test_load_collection_keeps_failures_in_place() {
    let manifest = sitedex::build::read_manifest(&fixture("partial")).unwrap();
    let loaded = load_collection::<ProjectEntry>(&fixture("partial"), &manifest.projects);
    assert_eq!(loaded.len(), 4);
    assert!(loaded[0].is_ok());
    // untitled.json parses; the missing title is caught at normalization
    assert!(loaded[1].is_ok());
    assert!(matches!(loaded[2], Err(BuildDocumentError::Parse { .. })));
    assert!(matches!(loaded[3], Err(BuildDocumentError::Read { .. })));
}
