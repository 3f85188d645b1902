// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # Invariants
//!
//! 1. **COMPLETE**: every token derived from document `i` has `i` in its
//!    posting list.
//! 2. **NO_DUPLICATES**: a position appears at most once per posting list.
//! 3. **FIRST_SEEN_ORDER**: posting lists are in ascending position order,
//!    which is the order documents were encountered. Ranking re-sorts, so
//!    nothing depends on this beyond determinism.
//! 4. **NON_EMPTY**: every key has at least one posting.

use crate::types::{DocPosition, Document, InvertedIndex};
use crate::util::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tokens a document contributes to the index, in derivation order.
///
/// Title tokens, then content, then each tag, then the kind tag itself as a
/// single token (`project`, `note`). Repeats are kept; the
/// index builder skips them.
pub fn document_tokens(doc: &Document) -> Vec<String> {
    let mut tokens = tokenize(&doc.title);
    tokens.extend(tokenize(&doc.content));
    for tag in &doc.tags {
        tokens.extend(tokenize(tag));
    }
    tokens.push(doc.kind.as_str().to_string());
    tokens
}

/// Append `position` unless it is already the last entry.
///
/// Documents are processed one at a time in position order, so checking the
/// tail is enough to keep each posting list duplicate-free.
fn push_posting(index: &mut InvertedIndex, token: String, position: DocPosition) {
    let postings = index.entry(token).or_default();
    if postings.last() != Some(&position) {
        postings.push(position);
    }
}

/// Build the inverted index for `docs`, using slice order as positions.
pub fn build_inverted_index(docs: &[Document]) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (position, doc) in docs.iter().enumerate() {
        for token in document_tokens(doc) {
            push_posting(&mut index, token, position as DocPosition);
        }
    }
    index
}

/// Build the inverted index with parallel tokenization.
///
/// Map phase tokenizes documents on the rayon pool; the reduce phase merges
/// in position order, so the result is identical to `build_inverted_index`.
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(docs: &[Document]) -> InvertedIndex {
    let per_doc_tokens: Vec<Vec<String>> = docs.par_iter().map(document_tokens).collect();

    let mut index = InvertedIndex::new();
    for (position, tokens) in per_doc_tokens.into_iter().enumerate() {
        for token in tokens {
            push_posting(&mut index, token, position as DocPosition);
        }
    }
    index
}
