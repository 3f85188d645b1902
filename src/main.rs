// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use sitedex::build::{run_build, BuildOptions};
use sitedex::controller::NO_MATCHES_MESSAGE;
use sitedex::search::QueryEngine;
use sitedex::types::{DocKind, SearchPayload};
use sitedex::util::format_date;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// How many of the longest posting lists `inspect` lists.
const TOP_POSTINGS: usize = 8;

fn main() {
    sitedex::logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index {
            input,
            output,
            pretty,
            no_headers,
        } => run_index(&input, &output, pretty, !no_headers),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Search { file, query, limit } => run_search(&file, &query, limit),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_index(input: &Path, output: &Path, pretty: bool, emit_headers: bool) -> Result<()> {
    let options = BuildOptions {
        pretty,
        emit_headers,
    };
    let start = Instant::now();
    let summary = run_build(input, output, &options)?;
    let elapsed = start.elapsed();

    println!();
    double_header();
    title("SEARCH INDEX BUILT");
    double_divider();
    row_double(&format!(
        "  {}",
        styled(&[DIM], &summary.output_file.display().to_string())
    ));
    double_footer();

    section_top("Summary");
    row(&format!("  Documents  {}", pad_left(&summary.doc_count.to_string(), 10)));
    let dropped = summary.dropped.to_string();
    let dropped = if summary.dropped > 0 {
        themed(YELLOW, &[BOLD], &dropped)
    } else {
        dropped
    };
    row(&format!("  Dropped    {}", pad_left(&dropped, 10)));
    row(&format!("  Tokens     {}", pad_left(&summary.term_count.to_string(), 10)));
    row(&format!("  Size       {}", pad_left(&format_size(summary.bytes), 10)));
    row(&format!(
        "  CRC32      {}",
        pad_left(&themed(CYAN, &[], &format!("{:08x}", summary.crc32)), 10)
    ));
    row(&format!(
        "  Time       {}",
        pad_left(&format!("{:.1} ms", elapsed.as_secs_f64() * 1000.0), 10)
    ));
    section_bot();
    Ok(())
}

fn read_payload(file: &Path) -> Result<(Vec<u8>, SearchPayload)> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let text = std::str::from_utf8(&bytes).with_context(|| format!("{} is not UTF-8", file.display()))?;
    let payload = SearchPayload::from_json(text)?;
    Ok((bytes, payload))
}

fn brotli_size(data: &[u8]) -> Result<usize> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder.write_all(data).context("brotli compression failed")?;
    }
    Ok(compressed.len())
}

fn run_inspect(file: &Path) -> Result<()> {
    let (bytes, payload) = read_payload(file)?;
    let compressed = brotli_size(&bytes)?;

    let mut per_kind: BTreeMap<DocKind, usize> = BTreeMap::new();
    for item in &payload.items {
        *per_kind.entry(item.kind).or_default() += 1;
    }

    let mut longest: Vec<(&String, usize)> = payload
        .index
        .iter()
        .map(|(token, postings)| (token, postings.len()))
        .collect();
    longest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    longest.truncate(TOP_POSTINGS);

    println!();
    double_header();
    title("SEARCH PAYLOAD");
    double_divider();
    row_double(&format!("  {}", styled(&[DIM], &file.display().to_string())));
    double_footer();

    section_top("Payload");
    let generated = if payload.generated_at.is_empty() {
        themed(GRAY, &[], "(missing)")
    } else {
        payload.generated_at.clone()
    };
    row(&format!("  generatedAt  {}", generated));
    row(&format!("  Items        {}", payload.items.len()));
    for (kind, count) in &per_kind {
        row(&format!("    {} {}", pad_right(&kind_badge(*kind), 12), count));
    }
    row(&format!("  Tokens       {}", payload.index.len()));

    section_mid("Largest posting lists");
    for (token, len) in &longest {
        row(&format!(
            "  {} {}",
            pad_right(&themed(GREEN, &[], token), 24),
            pad_left(&len.to_string(), 6)
        ));
    }

    section_mid("Size");
    row(&format!("  Raw          {}", pad_left(&format_size(bytes.len()), 10)));
    row(&format!(
        "  Brotli       {}  {}",
        pad_left(&format_size(compressed), 10),
        savings_colored(bytes.len(), compressed)
    ));
    row(&format!(
        "  CRC32        {}",
        themed(CYAN, &[], &format!("{:08x}", crc32fast::hash(&bytes)))
    ));
    section_bot();
    Ok(())
}

fn run_search(file: &Path, query: &str, limit: usize) -> Result<()> {
    let (_, payload) = read_payload(file)?;
    let engine = QueryEngine::from_payload(payload)?;

    let start = Instant::now();
    let results = engine.search(query, limit);
    let elapsed = start.elapsed();

    println!();
    section_top(&format!("Results for \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], NO_MATCHES_MESSAGE)));
    }
    for (rank, result) in results.iter().enumerate() {
        let Some(item) = engine.item(result.position) else {
            continue;
        };
        row(&format!(
            "{} {}  {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            score_value(result.score),
            kind_badge(item.kind),
            highlight_terminal(&truncate(&item.title, 50), query)
        ));
        if !item.summary.is_empty() {
            row(&format!(
                "           {}",
                highlight_terminal(&truncate(&item.summary, 66), query)
            ));
        }
        let mut meta = vec![item.url.clone()];
        if !item.tags.is_empty() {
            meta.push(item.tags.join(", "));
        }
        if let Some(date) = &item.date {
            meta.push(format_date(date));
        }
        row(&format!("           {}", styled(&[DIM], &truncate(&meta.join(" · "), 66))));
    }
    section_mid("Stats");
    row(&format!(
        "  {} of {} items in {:.3} ms",
        results.len(),
        engine.len(),
        elapsed.as_secs_f64() * 1000.0
    ));
    section_bot();
    Ok(())
}
