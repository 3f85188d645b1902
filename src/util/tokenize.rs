// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shared tokenizer.
//!
//! A token is a maximal run of `[a-z0-9]` after ASCII case folding. Anything
//! else splits, including `-`, `_`, and every non-ASCII character. There is
//! no locale handling beyond ASCII folding.

/// Split `text` into lowercase alphanumeric tokens.
///
/// ```
/// use sitedex::tokenize;
///
/// assert_eq!(tokenize("Hello, World!!"), vec!["hello", "world"]);
/// assert_eq!(tokenize("a-b_c"), vec!["a", "b", "c"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
