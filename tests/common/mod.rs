//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use sitedex::error::PayloadError;
use sitedex::runtime::PayloadFetcher;
use sitedex::search::QueryEngine;
use sitedex::types::{Document, SearchPayload};

// Re-export canonical test utilities from sitedex::testing
pub use sitedex::testing::{make_dated_document, make_document, make_payload, TEST_GENERATED_AT};

// ============================================================================
// FIXTURES
// ============================================================================

/// Directory containing the build fixtures.
pub const BUILD_FIXTURES_DIR: &str = "data/build-fixtures";

/// Path to one fixture input directory.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(BUILD_FIXTURES_DIR).join(name)
}

// ============================================================================
// ENGINES
// ============================================================================

/// Build a validated engine straight from documents.
pub fn engine_for(docs: Vec<Document>) -> QueryEngine {
    QueryEngine::from_payload(make_payload(docs)).expect("test payload should validate")
}

pub fn payload_json(payload: &SearchPayload) -> String {
    serde_json::to_string(payload).expect("payload serializes")
}

// ============================================================================
// FETCHERS
// ============================================================================

/// Fetcher that replays scripted responses and counts requests.
///
/// The last response repeats once the script runs out.
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<String, PayloadError>>>,
    last: Mutex<Option<Result<String, PayloadError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<String, PayloadError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn serving(payload: &SearchPayload) -> Self {
        Self::new(vec![Ok(payload_json(payload))])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PayloadFetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<String, PayloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.responses.lock().pop_front();
        let mut last = self.last.lock();
        if let Some(response) = next {
            *last = Some(response);
        }
        last.clone()
            .unwrap_or_else(|| Err(PayloadError::load("no scripted response")))
    }
}
