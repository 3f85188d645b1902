// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitedex command-line interface.
//!
//! Three subcommands: `index` builds `search-index.json` from content
//! collections, `inspect` summarizes a payload, and `search` ranks a payload
//! the same way the browser dialog does.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sitedex::search::DEFAULT_RESULT_LIMIT;

#[derive(Parser)]
#[command(
    name = "sitedex",
    about = "Inverted-index search payload builder for static sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search-index.json from a directory of content entries
    Index {
        /// Input directory containing manifest.json and entry files
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for search-index.json and _headers
        #[arg(short, long)]
        output: PathBuf,

        /// Pretty-print the payload JSON
        #[arg(long)]
        pretty: bool,

        /// Skip writing the _headers file
        #[arg(long)]
        no_headers: bool,
    },

    /// Summarize a search-index.json file
    Inspect {
        /// Path to search-index.json
        file: PathBuf,
    },

    /// Search a search-index.json file and display results
    Search {
        /// Path to search-index.json
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },
}
