// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search payload.
//!
//! A `Document` is what the builder works with: it still carries the full
//! `content` used for tokenizing. A `SearchItem` is what ships to clients:
//! the same record minus `content`. The payload pairs the item list with an
//! inverted index whose posting lists point into that list by position.
//!
//! # Invariants
//!
//! - **Document ids**: unique across one payload. The builder drops later
//!   duplicates; readers may assume uniqueness.
//! - **Postings**: every position in `index[token]` is `< items.len()`, and
//!   no position repeats within one posting list.
//! - **Positions are stable**: `items` order never changes after the build,
//!   so positions stay valid for the lifetime of one payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Position of an item inside `SearchPayload::items`.
pub type DocPosition = u32;

/// Posting list: positions of the documents that contain one token,
/// in first-seen order.
pub type PostingList = Vec<DocPosition>;

/// Token → posting list.
///
/// A `BTreeMap` so the serialized object has sorted keys and two builds of
/// the same corpus differ only in `generatedAt`.
pub type InvertedIndex = BTreeMap<String, PostingList>;

/// Kind of searchable document.
///
/// The wire tag doubles as an index token, so searching for `project` or
/// `note` narrows results to that kind. Both tags are single tokens under
/// the query tokenizer; `lab-note` is still read as a note.
///
/// Tags this crate does not know (a payload from a newer builder) read as
/// `Other` instead of rejecting the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocKind {
    #[serde(rename = "project")]
    Project,
    #[serde(rename = "note", alias = "lab-note")]
    LabNote,
    #[serde(rename = "other", other)]
    Other,
}

impl DocKind {
    /// Wire tag, also indexed as a single unsplit token.
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Project => "project",
            DocKind::LabNote => "note",
            DocKind::Other => "other",
        }
    }

    /// Prefix used when deriving a document id from a slug.
    pub fn id_prefix(self) -> &'static str {
        match self {
            DocKind::Project => "project",
            DocKind::LabNote => "blog",
            DocKind::Other => "item",
        }
    }

    /// Human-readable label for result lists.
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Project => "Project",
            DocKind::LabNote => "Lab Note",
            DocKind::Other => "Page",
        }
    }
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A searchable unit, as seen by the index builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `<kind prefix>-<slug>`, stable across rebuilds.
    pub id: String,
    pub kind: DocKind,
    pub title: String,
    /// Canonical link used when a result is selected.
    pub url: String,
    /// Display order is insertion order.
    pub tags: Vec<String>,
    pub summary: String,
    /// Sanitized body text. Indexed, never shipped.
    pub content: String,
    /// ISO-8601 timestamp, used only as a ranking tie-break.
    pub date: Option<String>,
}

impl Document {
    /// Strip the private `content` field for serialization.
    pub fn to_item(&self) -> SearchItem {
        SearchItem {
            id: self.id.clone(),
            kind: self.kind,
            title: self.title.clone(),
            url: self.url.clone(),
            tags: self.tags.clone(),
            summary: self.summary.clone(),
            date: self.date.clone(),
        }
    }
}

/// A document as shipped in the payload: everything except `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocKind,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The serialized snapshot served at `/search-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub generated_at: String,
    pub items: Vec<SearchItem>,
    pub index: InvertedIndex,
}

/// One ranked hit: a payload position plus its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedResult {
    pub position: usize,
    pub score: u32,
}
