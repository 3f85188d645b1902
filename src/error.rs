// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Nothing in the client path is fatal: payload errors become a visible error
//! state, highlight errors fall back to plain text, and per-document build
//! errors drop one document. Only `BuildError` stops a build.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a usable search payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The fetch itself failed or returned a non-success status.
    #[error("failed to load search index: {0}")]
    Load(String),

    /// The response arrived but is not a search payload.
    #[error("malformed search index: {0}")]
    Shape(String),
}

impl PayloadError {
    pub fn load(message: impl Into<String>) -> Self {
        PayloadError::Load(message.into())
    }

    pub fn shape(message: impl Into<String>) -> Self {
        PayloadError::Shape(message.into())
    }
}

/// A single source entry that could not become a `Document`.
///
/// The builder logs these and keeps going.
#[derive(Error, Debug)]
pub enum BuildDocumentError {
    #[error("{source_name}: missing required field \"title\"")]
    MissingTitle { source_name: String },

    #[error("{source_name}: unable to derive a slug")]
    InvalidSlug { source_name: String },

    #[error("{source_name}: duplicate document id \"{id}\"")]
    DuplicateId { source_name: String, id: String },

    #[error("failed to read {path}: {error}")]
    Read {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("invalid JSON in {path}: {error}")]
    Parse {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },
}

/// A failure that aborts the whole build.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to read manifest {path}: {error}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("invalid manifest JSON: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("unsupported manifest version {0}")]
    ManifestVersion(u32),

    #[error("failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {path}: {error}")]
    Write {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}

/// Highlight pattern could not be built for a query.
#[derive(Error, Debug)]
#[error("failed to build highlight pattern: {0}")]
pub struct HighlightError(#[from] pub regex::Error);
