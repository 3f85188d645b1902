// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Payload boundary checks.
//!
//! The payload arrives over the network, so it is validated once here and
//! trusted afterwards. Anything that is not a payload (bad JSON, a missing
//! `items` or `index`, a posting that points past the item list) becomes
//! `PayloadError::Shape` instead of surfacing later as a panic in ranking.

use serde::Deserialize;

use crate::error::PayloadError;
use crate::types::{InvertedIndex, SearchItem, SearchPayload};

/// Every top-level field optional, so a missing one is reported by name
/// instead of as a generic serde error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    generated_at: Option<String>,
    items: Option<Vec<SearchItem>>,
    index: Option<InvertedIndex>,
}

impl SearchPayload {
    /// Parse and validate a payload from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let raw: RawPayload = serde_json::from_str(json).map_err(|e| PayloadError::shape(e.to_string()))?;
        let items = raw.items.ok_or_else(|| PayloadError::shape("missing \"items\""))?;
        let index = raw.index.ok_or_else(|| PayloadError::shape("missing \"index\""))?;

        let payload = SearchPayload {
            generated_at: raw.generated_at.unwrap_or_default(),
            items,
            index,
        };
        payload.validate()?;
        Ok(payload)
    }

    /// Check that every posting points at an item.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let item_count = self.items.len();
        for (token, postings) in &self.index {
            if let Some(&position) = postings.iter().find(|&&p| p as usize >= item_count) {
                return Err(PayloadError::Shape(format!(
                    "posting {} for \"{}\" is out of range ({} items)",
                    position, token, item_count
                )));
            }
        }
        Ok(())
    }
}
