// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score accumulation.
//!
//! # Constants
//!
//! | Token length | Weight |
//! |--------------|--------|
//! | ≤ 4          | 1      |
//! | > 4          | 2      |
//!
//! A document's score is the sum of weights over every query token whose
//! posting list contains it. Query tokens are not deduplicated: typing a
//! word twice counts it twice.

use std::collections::HashMap;

use crate::types::InvertedIndex;

/// Tokens longer than this many characters get `LONG_TOKEN_WEIGHT`.
pub const LONG_TOKEN_THRESHOLD: usize = 4;

pub const SHORT_TOKEN_WEIGHT: u32 = 1;

pub const LONG_TOKEN_WEIGHT: u32 = 2;

/// Weight a single matching token contributes.
#[inline]
pub fn token_weight(token: &str) -> u32 {
    if token.len() > LONG_TOKEN_THRESHOLD {
        LONG_TOKEN_WEIGHT
    } else {
        SHORT_TOKEN_WEIGHT
    }
}

/// Accumulate scores per document position.
///
/// Documents with no matching token are absent from the map rather than
/// present with zero.
pub fn accumulate_scores(index: &InvertedIndex, tokens: &[String]) -> HashMap<usize, u32> {
    let mut scores: HashMap<usize, u32> = HashMap::new();
    for token in tokens {
        let Some(postings) = index.get(token) else {
            continue;
        };
        let weight = token_weight(token);
        for &position in postings {
            *scores.entry(position as usize).or_insert(0) += weight;
        }
    }
    scores
}
