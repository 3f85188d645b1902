//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::build_payload_at;
use crate::types::{DocKind, Document, SearchPayload};
use crate::util::sanitize_slug;

/// Fixed `generatedAt` used by test payloads.
pub const TEST_GENERATED_AT: &str = "2024-01-01T00:00:00.000Z";

/// Create a document with an id and url derived from the title.
pub fn make_document(title: &str, kind: DocKind) -> Document {
    let slug = sanitize_slug(title);
    let section = match kind {
        DocKind::Project => "projects",
        DocKind::LabNote => "blog",
        DocKind::Other => "pages",
    };
    Document {
        id: format!("{}-{}", kind.id_prefix(), slug),
        kind,
        title: title.to_string(),
        url: format!("/{}/{}/", section, slug),
        tags: vec![],
        summary: format!("Summary for {}", title),
        content: String::new(),
        date: None,
    }
}

/// Create a document with a date.
pub fn make_dated_document(title: &str, kind: DocKind, date: &str) -> Document {
    Document {
        date: Some(date.to_string()),
        ..make_document(title, kind)
    }
}

/// Build a payload with a fixed timestamp.
pub fn make_payload(docs: Vec<Document>) -> SearchPayload {
    build_payload_at(docs, TEST_GENERATED_AT.to_string()).payload
}
