// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostics (tracing, written to stderr)
// 3. Validate the seed host
// 4. Run the crawl, printing each level as it finishes
// 5. Exit with proper code:
//      0 = crawl finished (even if some pages failed to load)
//      1 = unexpected error (e.g. HTTP client could not be created)
//      2 = the host is malformed
//      3 = no host was given
// =============================================================================

mod cli;
mod crawl;
mod error;
mod extract;
mod fetch;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::{Crawler, Seed};
use error::InputError;
use fetch::HttpFetcher;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Input errors carry their own exit code
            if let Some(input) = e.downcast_ref::<InputError>() {
                eprintln!("Error: {}", input);
                input.exit_code()
            } else {
                error!("{:#}", e);
                1
            }
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so stdout only carries crawl results
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let seed = Seed::parse(cli.host.as_deref().unwrap_or(""))?;

    let fetcher = HttpFetcher::new(&cli.http_settings()).context("Failed to create HTTP client")?;
    let json = cli.json;

    info!(host = seed.host(), max_depth = cli.max_depth, "starting crawl");

    let crawler = Crawler::new(seed, Arc::new(fetcher), cli.crawl_config());
    let summary = crawler
        .run(|level| {
            if json {
                match report::level_json(level) {
                    Ok(line) => println!("{}", line),
                    Err(e) => error!("Failed to serialize level {}: {}", level.depth, e),
                }
            } else {
                println!("{}", report::format_level(level));
            }
        })
        .await;

    if json {
        println!("{}", report::summary_json(&summary)?);
    } else {
        info!(
            levels = summary.levels,
            links = summary.visited.len(),
            fetched = summary.fetched,
            failed = summary.failed,
            stop_reason = ?summary.stop_reason,
            "crawl finished"
        );
    }

    Ok(0)
}
