// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The host is an Option on purpose: a missing host is our own usage error
// with its own exit code, not clap's generic one.
// =============================================================================

use crate::crawl::{CrawlConfig, MAX_DEPTH};
use crate::fetch::HttpSettings;
use clap::Parser;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "level-crawler",
    version,
    about = "Crawl a website breadth-first and list every link path it finds",
    long_about = "level-crawler fetches http://<HOST>, collects the href of every anchor tag, \
                  and keeps fetching newly found links level by level until the depth limit \
                  is reached or a level turns up nothing new."
)]
pub struct Cli {
    /// Bare host to crawl, without a scheme (e.g. example.com or localhost:8080)
    pub host: Option<String>,

    /// Maximum number of levels to crawl
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Cap on concurrent fetches within a level (default: no cap)
    #[arg(long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Output each level and the final summary as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Show debug diagnostics on stderr (RUST_LOG overrides this)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_depth: self.max_depth,
            concurrency: self.concurrency.map(NonZeroUsize::get),
        }
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpSettings::default()
        }
    }
}
