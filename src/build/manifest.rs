// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `manifest.json`: which entry files make up each collection.

use serde::Deserialize;

/// Manifest format understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    /// Project entry files, relative to the input directory.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Note entry files, relative to the input directory.
    #[serde(default, alias = "blog")]
    pub notes: Vec<String>,
    #[serde(default)]
    pub routes: Routes,
}

/// URL prefixes per collection.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Routes {
    pub projects: String,
    #[serde(alias = "blog")]
    pub notes: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            projects: "/projects/".to_string(),
            notes: "/blog/".to_string(),
        }
    }
}

fn join_route(prefix: &str, slug: &str) -> String {
    format!("{}/{}/", prefix.trim_end_matches('/'), slug)
}

impl Routes {
    pub fn project_url(&self, slug: &str) -> String {
        join_route(&self.projects, slug)
    }

    pub fn note_url(&self, slug: &str) -> String {
        join_route(&self.notes, slug)
    }
}
