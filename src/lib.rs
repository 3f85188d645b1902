// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted-index site search.
//!
//! A build step turns content collections into one JSON payload: the
//! document list plus a token → positions index. The query engine ranks that
//! payload by weighted token overlap, and the controller drives the search
//! dialog (loading, keyboard navigation, focus trap) around it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   build/    │────▶│  index/      │────▶│  payload.rs  │
//! │ (manifest,  │     │ (inverted    │     │ (shape check)│
//! │  entries)   │     │  index)      │     └──────┬───────┘
//! └─────────────┘     └──────────────┘            │
//!        │                                        ▼
//!        │            ┌──────────────┐     ┌──────────────┐
//!        └───────────▶│  util/       │◀────│  search/     │
//!                     │ (tokenize)   │     │ (QueryEngine)│
//!                     └──────────────┘     └──────┬───────┘
//!                                                 │
//!                     ┌──────────────┐     ┌──────▼───────┐
//!                     │  runtime/    │────▶│ controller/  │
//!                     │ (fetch, wasm)│     │ (dialog FSM) │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Tokenizing
//!
//! One rule on both sides: ASCII-lowercase, then split on every character
//! outside `[a-z0-9]`. See [`tokenize`].
//!
//! ```
//! use sitedex::build::build_payload_at;
//! use sitedex::search::QueryEngine;
//! use sitedex::testing::make_document;
//! use sitedex::types::DocKind;
//!
//! let built = build_payload_at(
//!     vec![make_document("Edge Router", DocKind::Project)],
//!     "2024-01-01T00:00:00.000Z".to_string(),
//! );
//! let engine = QueryEngine::from_payload(built.payload).unwrap();
//! let results = engine.search("edge", 20);
//! assert_eq!(results[0].position, 0);
//! ```

pub mod build;
pub mod controller;
pub mod error;
pub mod index;
pub mod logging;
pub mod payload;
pub mod runtime;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use build::{build_payload, build_payload_at, run_build, BuildOptions, BuildSummary};
pub use controller::{ControllerState, Effect, KeyEvent, PayloadCache, SearchController};
pub use error::{BuildDocumentError, BuildError, HighlightError, PayloadError};
pub use index::build_inverted_index;
pub use search::{highlight_html, QueryEngine, DEFAULT_RESULT_LIMIT};
pub use types::{DocKind, Document, InvertedIndex, RankedResult, SearchItem, SearchPayload};
pub use util::tokenize;
