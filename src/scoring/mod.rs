// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores are plain term-frequency weights over the query tokens. Longer
//! tokens are more specific and count double. Ties fall to recency, then to
//! payload position, so the order is total.

mod core;
pub mod ranking;

pub use self::core::*;
