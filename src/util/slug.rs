// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Slug derivation for project entries.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").expect("valid slug pattern"));
static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("valid slug run pattern"));
static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid dash pattern"));

/// True when `value` is already a clean slug.
pub fn is_valid_slug(value: &str) -> bool {
    SLUG_PATTERN.is_match(value)
}

/// Lowercase, replace invalid runs with `-`, collapse and trim dashes.
pub fn sanitize_slug(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let replaced = INVALID_RUN.replace_all(&lowered, "-");
    let collapsed = DASH_RUN.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Pick the frontmatter slug when it is valid, else sanitize the entry slug.
///
/// Returns `None` when nothing usable is left.
pub fn resolve_slug(frontmatter: Option<&str>, entry_slug: &str) -> Option<String> {
    let slug = match frontmatter {
        Some(candidate) if is_valid_slug(candidate) => candidate.to_string(),
        _ => sanitize_slug(entry_slug),
    };
    (!slug.is_empty()).then_some(slug)
}

/// Hands out unique slugs in encounter order: `foo`, `foo-2`, `foo-3`.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique(&mut self, base: &str) -> String {
        let count = self.seen.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{}-{}", base, count)
        }
    }
}
