// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel entry loading.
//!
//! Reading and parsing entry files is the only expensive part of a build and
//! it is embarrassingly parallel. Rayon's indexed `par_iter().collect()` keeps
//! manifest order, so document positions come out the same as a sequential
//! load. A file that cannot be read or parsed becomes a per-entry error; the
//! caller logs it and keeps going.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use super::source::{EntryOrigin, SourceEntry};
use crate::error::BuildDocumentError;

/// Result of loading one entry file.
pub type LoadedEntry<E> = Result<E, BuildDocumentError>;

/// Read and parse one entry file, recording where it came from.
pub fn load_entry<E>(input_dir: &Path, filename: &str) -> LoadedEntry<E>
where
    E: DeserializeOwned + SourceEntry,
{
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|error| BuildDocumentError::Read {
        path: path.clone(),
        error,
    })?;
    let mut entry: E = serde_json::from_str(&content).map_err(|error| BuildDocumentError::Parse {
        path: path.clone(),
        error,
    })?;

    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    *entry.origin_mut() = EntryOrigin {
        source_name: filename.to_string(),
        entry_slug: stem,
    };
    Ok(entry)
}

/// Load every file of one collection, preserving manifest order.
#[cfg(feature = "parallel")]
pub fn load_collection<E>(input_dir: &Path, files: &[String]) -> Vec<LoadedEntry<E>>
where
    E: DeserializeOwned + SourceEntry + Send,
{
    files
        .par_iter()
        .map(|filename| load_entry(input_dir, filename))
        .collect()
}

/// Load every file of one collection, preserving manifest order.
#[cfg(not(feature = "parallel"))]
pub fn load_collection<E>(input_dir: &Path, files: &[String]) -> Vec<LoadedEntry<E>>
where
    E: DeserializeOwned + SourceEntry,
{
    files
        .iter()
        .map(|filename| load_entry(input_dir, filename))
        .collect()
}

/// Load one collection in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_collection_with_progress<E>(
    input_dir: &Path,
    files: &[String],
    progress: &ProgressBar,
) -> Vec<LoadedEntry<E>>
where
    E: DeserializeOwned + SourceEntry + Send,
{
    let counter = AtomicUsize::new(0);
    let total = files.len();

    files
        .par_iter()
        .map(|filename| {
            let entry = load_entry(input_dir, filename);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            entry
        })
        .collect()
}
