// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the builder and the query engine.
//!
//! The tokenizer lives here because both sides must use the exact same
//! function: a builder that splits differently from the engine silently
//! loses recall without ever raising an error.

pub mod date;
pub mod sanitize;
pub mod slug;
pub mod tokenize;

pub use date::{format_date, parse_timestamp, timestamp_millis, to_iso_millis};
pub use sanitize::strip_markdown;
pub use slug::{is_valid_slug, resolve_slug, sanitize_slug, SlugRegistry};
pub use tokenize::tokenize;
