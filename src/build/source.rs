// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw content entries and their normalization into `Document`.
//!
//! The site has two collections with different frontmatter. Projects carry a
//! `problem` statement and a string `date`; notes carry a `description` and a
//! `pubDate`. Each shape implements `SourceEntry`, and `Normalizer` turns any
//! of them into the common `Document`.

use serde::Deserialize;
use tracing::warn;

use super::manifest::Routes;
use crate::error::BuildDocumentError;
use crate::types::{DocKind, Document};
use crate::util::{parse_timestamp, resolve_slug, sanitize_slug, strip_markdown, to_iso_millis, SlugRegistry};

/// Where an entry came from, filled in by the loader.
#[derive(Clone, Debug, Default)]
pub struct EntryOrigin {
    /// Path shown in warnings.
    pub source_name: String,
    /// Slug derived from the file stem.
    pub entry_slug: String,
}

/// A project entry: `src/content/projects/*.md` frontmatter plus body.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(skip)]
    pub origin: EntryOrigin,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Problem statement, shown as the result summary.
    pub problem: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub body: String,
}

/// A blog / lab-note entry.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    #[serde(skip)]
    pub origin: EntryOrigin,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub body: String,
}

/// A collection shape the builder knows how to normalize.
pub trait SourceEntry {
    const KIND: DocKind;

    fn origin(&self) -> &EntryOrigin;

    fn origin_mut(&mut self) -> &mut EntryOrigin;

    fn into_document(self, normalizer: &mut Normalizer) -> Result<Document, BuildDocumentError>;
}

/// Normalization state shared across one build: routes and slug registry.
#[derive(Debug, Default)]
pub struct Normalizer {
    routes: Routes,
    project_slugs: SlugRegistry,
}

impl Normalizer {
    pub fn new(routes: Routes) -> Self {
        Self {
            routes,
            project_slugs: SlugRegistry::new(),
        }
    }

    pub fn normalize<E: SourceEntry>(&mut self, entry: E) -> Result<Document, BuildDocumentError> {
        entry.into_document(self)
    }
}

fn require_title(title: Option<String>, origin: &EntryOrigin) -> Result<String, BuildDocumentError> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(BuildDocumentError::MissingTitle {
            source_name: origin.source_name.clone(),
        }),
    }
}

impl SourceEntry for ProjectEntry {
    const KIND: DocKind = DocKind::Project;

    fn origin(&self) -> &EntryOrigin {
        &self.origin
    }

    fn origin_mut(&mut self) -> &mut EntryOrigin {
        &mut self.origin
    }

    fn into_document(self, normalizer: &mut Normalizer) -> Result<Document, BuildDocumentError> {
        let title = require_title(self.title, &self.origin)?;
        let base = resolve_slug(self.slug.as_deref(), &self.origin.entry_slug).ok_or_else(|| {
            BuildDocumentError::InvalidSlug {
                source_name: self.origin.source_name.clone(),
            }
        })?;
        let slug = normalizer.project_slugs.unique(&base);

        Ok(Document {
            id: format!("{}-{}", Self::KIND.id_prefix(), slug),
            kind: Self::KIND,
            title,
            url: normalizer.routes.project_url(&slug),
            tags: self.tags,
            summary: self.problem.or(self.description).unwrap_or_default(),
            content: strip_markdown(&self.body),
            date: self.date,
        })
    }
}

impl SourceEntry for NoteEntry {
    const KIND: DocKind = DocKind::LabNote;

    fn origin(&self) -> &EntryOrigin {
        &self.origin
    }

    fn origin_mut(&mut self) -> &mut EntryOrigin {
        &mut self.origin
    }

    fn into_document(self, normalizer: &mut Normalizer) -> Result<Document, BuildDocumentError> {
        let title = require_title(self.title, &self.origin)?;
        let slug = self
            .slug
            .map(|slug| sanitize_slug(&slug))
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| sanitize_slug(&self.origin.entry_slug));
        if slug.is_empty() {
            return Err(BuildDocumentError::InvalidSlug {
                source_name: self.origin.source_name,
            });
        }

        let date = self.pub_date.as_deref().and_then(|raw| {
            let parsed = parse_timestamp(raw).map(to_iso_millis);
            if parsed.is_none() {
                warn!(source = %self.origin.source_name, pub_date = raw, "unparseable pubDate; indexing without a date");
            }
            parsed
        });

        Ok(Document {
            id: format!("{}-{}", Self::KIND.id_prefix(), slug),
            kind: Self::KIND,
            title,
            url: normalizer.routes.note_url(&slug),
            tags: self.tags.unwrap_or_default(),
            summary: self.description.unwrap_or_default(),
            content: strip_markdown(&self.body),
            date,
        })
    }
}
