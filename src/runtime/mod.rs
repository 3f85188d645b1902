// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hosts for the search controller.
//!
//! The controller only describes effects. Something has to fetch the payload
//! and feed it back: `fetch` does that natively (tokio), `wasm` hands it to
//! the browser, which owns the network and the DOM.

pub mod fetch;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use fetch::{dispatch, load_engine, PayloadFetcher};
#[cfg(not(target_arch = "wasm32"))]
pub use fetch::FileFetcher;
