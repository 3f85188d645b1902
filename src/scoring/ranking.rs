// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.

use std::cmp::Ordering;

/// A scored document awaiting ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub position: usize,
    pub score: u32,
    /// Milliseconds since the epoch; 0 for a missing or unparseable date.
    pub date_millis: i64,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Date** - descending (newer first; undated sorts as the epoch)
/// 3. **Position** - ascending, for absolute determinism
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.date_millis.cmp(&a.date_millis))
        .then_with(|| a.position.cmp(&b.position))
}
