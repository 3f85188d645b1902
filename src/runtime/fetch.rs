// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Async payload fetching.

use std::collections::VecDeque;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::controller::{Effect, SearchController};
use crate::error::PayloadError;
use crate::search::QueryEngine;

/// Source of the raw payload JSON.
#[async_trait]
pub trait PayloadFetcher: Send + Sync {
    /// Return the response body, or `PayloadError::Load` if the request failed.
    async fn fetch(&self) -> Result<String, PayloadError>;
}

/// Reads the payload from a file on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl PayloadFetcher for FileFetcher {
    async fn fetch(&self) -> Result<String, PayloadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PayloadError::load(format!("{}: {}", self.path.display(), e)))
    }
}

/// Fetch and validate a payload.
pub async fn load_engine<F>(fetcher: &F) -> Result<QueryEngine, PayloadError>
where
    F: PayloadFetcher + ?Sized,
{
    let body = fetcher.fetch().await?;
    QueryEngine::from_json(&body)
}

/// Carry out `FetchPayload` effects and return everything else, in order.
///
/// Effects produced by the controller in response to a load (focusing the
/// input) are appended to the result.
pub async fn dispatch<F>(
    controller: &mut SearchController,
    fetcher: &F,
    effects: Vec<Effect>,
) -> Vec<Effect>
where
    F: PayloadFetcher + ?Sized,
{
    let mut queue: VecDeque<Effect> = effects.into();
    let mut remaining = Vec::new();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::FetchPayload => {
                debug!("fetching search index");
                let outcome = load_engine(fetcher).await;
                queue.extend(controller.payload_loaded(outcome));
            }
            other => remaining.push(other),
        }
    }
    remaining
}
