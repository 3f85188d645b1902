// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: rank payload items for a query string.
//!
//! Everything here is synchronous and pure. The engine is built once per
//! payload and then queried on every keystroke, so per-item work that does
//! not depend on the query (parsing dates) happens at construction.

pub mod highlight;

use crate::error::PayloadError;
use crate::scoring::accumulate_scores;
use crate::scoring::ranking::{compare_candidates, Candidate};
use crate::types::{InvertedIndex, RankedResult, SearchItem, SearchPayload};
use crate::util::{timestamp_millis, tokenize};

pub use highlight::{escape_html, highlight_html, highlight_spans, Span};

/// How many results the UI shows. Ranking itself is uncapped.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// A loaded, validated payload ready for queries.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    generated_at: String,
    items: Vec<SearchItem>,
    index: InvertedIndex,
    /// Tie-break key per item, parsed once.
    date_millis: Vec<i64>,
}

impl QueryEngine {
    /// Wrap a payload after checking its postings.
    pub fn from_payload(payload: SearchPayload) -> Result<Self, PayloadError> {
        payload.validate()?;
        let date_millis = payload
            .items
            .iter()
            .map(|item| timestamp_millis(item.date.as_deref()))
            .collect();
        Ok(Self {
            generated_at: payload.generated_at,
            items: payload.items,
            index: payload.index,
            date_millis,
        })
    }

    /// Parse, validate and wrap a payload.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Self::from_payload(SearchPayload::from_json(json)?)
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn item(&self, position: usize) -> Option<&SearchItem> {
        self.items.get(position)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rank every matching item. A query without tokens matches nothing.
    pub fn rank(&self, query: &str) -> Vec<RankedResult> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<Candidate> = accumulate_scores(&self.index, &tokens)
            .into_iter()
            .map(|(position, score)| Candidate {
                position,
                score,
                date_millis: self.date_millis.get(position).copied().unwrap_or(0),
            })
            .collect();
        candidates.sort_unstable_by(compare_candidates);

        candidates
            .into_iter()
            .map(|c| RankedResult {
                position: c.position,
                score: c.score,
            })
            .collect()
    }

    /// Rank and keep the top `limit` results.
    pub fn search(&self, query: &str, limit: usize) -> Vec<RankedResult> {
        let mut results = self.rank(query);
        results.truncate(limit);
        results
    }

    /// Like `search`, resolved to items.
    pub fn search_items(&self, query: &str, limit: usize) -> Vec<&SearchItem> {
        self.search(query, limit)
            .iter()
            .filter_map(|r| self.item(r.position))
            .collect()
    }
}
