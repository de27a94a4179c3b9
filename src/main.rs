// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use booksearch::session::{FileSource, NoRenderer, SearchOutcome, SearchSession};
use booksearch::{is_structural, parse_documents, BookOrderKey, LoadError, SearchOptions};
use clap::Parser;
use tracing::info;

mod cli;
use cli::display::{self, row, section_bot, section_top, themed, GRAY};
use cli::{Cli, CliError, Commands, OrderArg};

fn main() {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            order,
            limit,
            config,
            json,
        } => run_search(index, &query, order, limit, config.as_deref(), json),
        Commands::Inspect { index, config } => run_inspect(&index, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", display::error_mark(), e);
        process::exit(1);
    }
}

fn load_options(config: Option<&Path>) -> Result<SearchOptions, CliError> {
    match config {
        Some(path) => Ok(SearchOptions::from_json_file(path)?),
        None => Ok(SearchOptions::default()),
    }
}

fn run_search(
    index: PathBuf,
    query: &str,
    order: Option<OrderArg>,
    limit: Option<usize>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let mut options = load_options(config)?;
    if let Some(order) = order {
        options.order = order.into();
    }
    if let Some(limit) = limit {
        options.limit = limit;
    }

    let session = SearchSession::builder()
        .index_source(FileSource(index))
        .renderer_loader(NoRenderer)
        .options(options)
        .build()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(CliError::Runtime)?;

    let started = Instant::now();
    let outcome = runtime.block_on(session.search(query))?;
    info!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "query finished"
    );

    let views = match outcome {
        SearchOutcome::Results(views) => views,
        SearchOutcome::Idle | SearchOutcome::Stale => {
            if !json {
                println!("{}", themed(GRAY, &[], "nothing to search for"));
                return Ok(());
            }
            Vec::new()
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        display::print_results(query, &views);
    }
    Ok(())
}

fn run_inspect(index: &Path, config: Option<&Path>) -> Result<(), CliError> {
    let options = load_options(config)?;
    let payload = std::fs::read_to_string(index)
        .map_err(|e| LoadError::Fetch(format!("{}: {e}", index.display())))?;
    let docs = parse_documents(&payload)?;

    let structural = docs
        .iter()
        .filter(|doc| is_structural(&doc.url, &options.languages))
        .count();
    let untitled = docs
        .iter()
        .filter(|doc| doc.title.as_deref().map_or(true, |t| t.trim().is_empty()))
        .count();
    let placed = docs
        .iter()
        .filter(|doc| BookOrderKey::from_url(&doc.url) != BookOrderKey::LAST)
        .count();
    let with_math = docs.iter().filter(|doc| doc.content.contains('$')).count();
    let chars: usize = docs.iter().map(|doc| doc.content.chars().count()).sum();

    section_top(&index.display().to_string());
    row(&format!("  documents            {:>8}", docs.len()));
    row(&format!("  structural pages     {:>8}", structural));
    row(&format!("  untitled             {:>8}", untitled));
    row(&format!("  placed in book order {:>8}", placed));
    row(&format!("  containing math      {:>8}", with_math));
    row(&format!("  content characters   {:>8}", chars));
    section_bot();
    Ok(())
}
