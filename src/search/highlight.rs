// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-term highlighting for result titles and summaries.
//!
//! The pattern is built from raw user input: each whitespace-separated word
//! is regex-escaped and joined into one case-insensitive alternation. The
//! compiled size is capped, so a pathological query fails to compile
//! instead of eating memory. Callers that render treat that failure as
//! "no highlighting" and never propagate it.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::error::HighlightError;

/// Upper bound on the compiled highlight pattern.
pub const HIGHLIGHT_SIZE_LIMIT: usize = 1 << 16;

/// A run of text that did or did not match the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// `None` for a blank query.
fn highlight_pattern(query: &str) -> Result<Option<Regex>, HighlightError> {
    let words: Vec<String> = query.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return Ok(None);
    }
    let pattern = format!("(?:{})", words.join("|"));
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(HIGHLIGHT_SIZE_LIMIT)
        .build()?;
    Ok(Some(regex))
}

/// Split `text` into matched and unmatched spans.
pub fn highlight_spans<'a>(text: &'a str, query: &str) -> Result<Vec<Span<'a>>, HighlightError> {
    let Some(regex) = highlight_pattern(query)? else {
        return Ok(vec![Span { text, matched: false }]);
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in regex.find_iter(text) {
        if m.start() > last {
            spans.push(Span {
                text: &text[last..m.start()],
                matched: false,
            });
        }
        spans.push(Span {
            text: m.as_str(),
            matched: true,
        });
        last = m.end();
    }
    if last < text.len() {
        spans.push(Span {
            text: &text[last..],
            matched: false,
        });
    }
    Ok(spans)
}

/// Escape text for HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML with query matches wrapped in `<mark>`.
///
/// Falls back to plain escaped text if the pattern cannot be built.
pub fn highlight_html(text: &str, query: &str) -> String {
    match highlight_spans(text, query) {
        Ok(spans) => spans
            .iter()
            .map(|span| {
                if span.matched {
                    format!("<mark>{}</mark>", escape_html(span.text))
                } else {
                    escape_html(span.text)
                }
            })
            .collect(),
        Err(e) => {
            warn!(error = %e, "rendering result without highlighting");
            escape_html(text)
        }
    }
}
