// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-effort markdown stripping before tokenizing.
//!
//! Not a parser. The goal is that indexed tokens come from prose rather than
//! syntax: code fences vanish, inline code and link text survive, and
//! heading/emphasis/quote punctuation turns into whitespace.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid fenced code pattern"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link pattern"));
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#>*_~`-]+").expect("valid markup pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Reduce markdown to plain prose.
pub fn strip_markdown(value: &str) -> String {
    let text = FENCED_CODE.replace_all(value, " ");
    let text = INLINE_CODE.replace_all(&text, "${1}");
    let text = LINK.replace_all(&text, "${1}");
    let text = MARKUP.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
