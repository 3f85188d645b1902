// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index builder: content collections in, `search-index.json` out.
//!
//! 1. Read `manifest.json`
//! 2. Load project and note entries in parallel
//! 3. Normalize them into `Document`s (projects first, then notes)
//! 4. Build the inverted index and strip `content` from the items
//! 5. Write the payload plus a `_headers` file with its caching rules
//!
//! A bad entry never fails the build. It is logged and left out, and the
//! remaining documents keep consecutive positions.

pub mod manifest;
pub mod parallel;
pub mod source;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::error::{BuildDocumentError, BuildError};
#[cfg(not(feature = "parallel"))]
use crate::index::build_inverted_index;
#[cfg(feature = "parallel")]
use crate::index::build_inverted_index_parallel;
use crate::types::{Document, SearchPayload};
use crate::util::to_iso_millis;

pub use manifest::*;
pub use parallel::*;
pub use source::*;

/// Name of the emitted payload file.
pub const PAYLOAD_FILE: &str = "search-index.json";

/// Name of the static-host headers file.
pub const HEADERS_FILE: &str = "_headers";

/// Cache policy for the payload: content is immutable per deployment.
pub const CACHE_CONTROL: &str = "public, max-age=300, s-maxage=900";

pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Normalized documents in payload order, plus what was left out.
#[derive(Debug, Default)]
pub struct Corpus {
    normalizer: Normalizer,
    seen_ids: HashSet<String>,
    pub documents: Vec<Document>,
    pub dropped: Vec<BuildDocumentError>,
}

impl Corpus {
    pub fn new(routes: Routes) -> Self {
        Self {
            normalizer: Normalizer::new(routes),
            ..Self::default()
        }
    }

    /// Append one collection. Call in payload order.
    pub fn extend<E, I>(&mut self, entries: I)
    where
        E: SourceEntry,
        I: IntoIterator<Item = LoadedEntry<E>>,
    {
        for entry in entries {
            let normalized = entry.and_then(|entry| {
                let source_name = entry.origin().source_name.clone();
                self.normalizer.normalize(entry).map(|doc| (source_name, doc))
            });
            match normalized {
                Ok((source_name, doc)) => self.push(source_name, doc),
                Err(err) => self.drop_entry(err),
            }
        }
    }

    fn push(&mut self, source_name: String, doc: Document) {
        if self.seen_ids.insert(doc.id.clone()) {
            self.documents.push(doc);
        } else {
            let err = BuildDocumentError::DuplicateId { source_name, id: doc.id };
            self.drop_entry(err);
        }
    }

    fn drop_entry(&mut self, err: BuildDocumentError) {
        warn!(error = %err, "skipping document");
        self.dropped.push(err);
    }
}

/// A payload plus counts for reporting.
#[derive(Debug, Clone)]
pub struct BuiltPayload {
    pub payload: SearchPayload,
    pub doc_count: usize,
    pub term_count: usize,
}

/// Build a payload stamped with the current time.
pub fn build_payload(docs: Vec<Document>) -> BuiltPayload {
    build_payload_at(docs, to_iso_millis(Utc::now()))
}

/// Build a payload with an explicit `generatedAt`.
pub fn build_payload_at(docs: Vec<Document>, generated_at: String) -> BuiltPayload {
    #[cfg(feature = "parallel")]
    let index = build_inverted_index_parallel(&docs);
    #[cfg(not(feature = "parallel"))]
    let index = build_inverted_index(&docs);

    let items = docs.iter().map(Document::to_item).collect();
    BuiltPayload {
        doc_count: docs.len(),
        term_count: index.len(),
        payload: SearchPayload {
            generated_at,
            items,
            index,
        },
    }
}

/// Serialize a payload to the bytes served at `/search-index.json`.
pub fn encode_payload(payload: &SearchPayload, pretty: bool) -> Result<Vec<u8>, serde_json::Error> {
    if pretty {
        serde_json::to_vec_pretty(payload)
    } else {
        serde_json::to_vec(payload)
    }
}

/// `_headers` rules for the payload endpoint.
pub fn headers_file_contents() -> String {
    format!(
        "/{}\n  Content-Type: {}\n  Cache-Control: {}\n",
        PAYLOAD_FILE, CONTENT_TYPE, CACHE_CONTROL
    )
}

/// Options for `run_build`.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub pretty: bool,
    pub emit_headers: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            emit_headers: true,
        }
    }
}

/// What a build produced.
#[derive(Clone, Debug)]
pub struct BuildSummary {
    pub output_file: PathBuf,
    pub doc_count: usize,
    pub dropped: usize,
    pub term_count: usize,
    pub bytes: usize,
    pub crc32: u32,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

#[cfg(feature = "parallel")]
fn collection_bar(multi: &MultiProgress, prefix: &'static str, len: usize) -> ProgressBar {
    let bar = multi.add(ProgressBar::new(len as u64));
    bar.set_style(create_progress_style());
    bar.set_prefix(prefix);
    bar
}

/// Read the manifest under `input_dir`.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest, BuildError> {
    let manifest_path = input_dir.join("manifest.json");
    let manifest_content =
        fs::read_to_string(&manifest_path).map_err(|error| BuildError::ManifestRead {
            path: manifest_path.clone(),
            error,
        })?;
    let manifest: InputManifest = serde_json::from_str(&manifest_content)?;
    if manifest.version != MANIFEST_VERSION {
        return Err(BuildError::ManifestVersion(manifest.version));
    }
    Ok(manifest)
}

/// Load and normalize every collection listed in the manifest.
pub fn load_corpus(input_dir: &Path, manifest: &InputManifest) -> Corpus {
    let mut corpus = Corpus::new(manifest.routes.clone());

    #[cfg(feature = "parallel")]
    {
        let multi = MultiProgress::new();
        let projects_pb = collection_bar(&multi, "Projects", manifest.projects.len());
        let projects: Vec<LoadedEntry<ProjectEntry>> =
            load_collection_with_progress(input_dir, &manifest.projects, &projects_pb);
        projects_pb.finish_with_message(format!("loaded {} files", projects.len()));

        let notes_pb = collection_bar(&multi, "Notes", manifest.notes.len());
        let notes: Vec<LoadedEntry<NoteEntry>> =
            load_collection_with_progress(input_dir, &manifest.notes, &notes_pb);
        notes_pb.finish_with_message(format!("loaded {} files", notes.len()));

        corpus.extend(projects);
        corpus.extend(notes);
    }

    #[cfg(not(feature = "parallel"))]
    {
        corpus.extend(load_collection::<ProjectEntry>(input_dir, &manifest.projects));
        corpus.extend(load_collection::<NoteEntry>(input_dir, &manifest.notes));
    }

    corpus
}

/// Build `search-index.json` from the collections under `input_dir`.
pub fn run_build(
    input_dir: &Path,
    output_dir: &Path,
    options: &BuildOptions,
) -> Result<BuildSummary, BuildError> {
    let manifest = read_manifest(input_dir)?;
    let corpus = load_corpus(input_dir, &manifest);

    if corpus.documents.is_empty() {
        warn!("no documents loaded; writing an empty search index");
    }

    let dropped = corpus.dropped.len();
    let built = build_payload(corpus.documents);
    let bytes = encode_payload(&built.payload, options.pretty).map_err(BuildError::Encode)?;

    fs::create_dir_all(output_dir).map_err(|error| BuildError::Write {
        path: output_dir.to_path_buf(),
        error,
    })?;

    let output_file = output_dir.join(PAYLOAD_FILE);
    fs::write(&output_file, &bytes).map_err(|error| BuildError::Write {
        path: output_file.clone(),
        error,
    })?;

    if options.emit_headers {
        let headers_path = output_dir.join(HEADERS_FILE);
        fs::write(&headers_path, headers_file_contents()).map_err(|error| BuildError::Write {
            path: headers_path.clone(),
            error,
        })?;
    }

    info!(
        documents = built.doc_count,
        dropped,
        tokens = built.term_count,
        bytes = bytes.len(),
        "wrote {}",
        output_file.display()
    );

    Ok(BuildSummary {
        output_file,
        doc_count: built.doc_count,
        dropped,
        term_count: built.term_count,
        bytes: bytes.len(),
        crc32: crc32fast::hash(&bytes),
    })
}
