// src/crawl/engine.rs
// =============================================================================
// The crawl loop: run levels until one of the stop conditions hits.
//
//   Ready (depth 0, frontier = {seed})
//     -> Running: repeat while depth < max_depth and frontier not empty
//          run one level, depth += 1
//          no new links this level?  stop
//          otherwise report depth + whole visited set
//     -> Done
//
// "No new links" wins over everything else: even if the frontier still has
// addresses and depth is below the bound, an empty level ends the crawl.
//
// Per-fetch failures are absorbed inside the level (see cycle.rs), so the
// loop itself never fails.
// =============================================================================

use super::cycle::{run_level, LevelContext};
use super::frontier::Frontier;
use super::seed::Seed;
use super::visited::VisitedSet;
use crate::fetch::Fetcher;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::info;

/// Default bound on the number of levels.
pub const MAX_DEPTH: usize = 5;

/// Knobs for one crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub max_depth: usize,
    /// Optional cap on in-flight fetches within a level; None = one task per address
    pub concurrency: Option<usize>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            concurrency: None,
        }
    }
}

/// Why the crawl ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    MaxDepth,
    FrontierExhausted,
    NoNewLinks,
}

/// Emitted after every level that discovered at least one new link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub depth: usize,
    /// New at this level
    pub discovered: Vec<String>,
    /// Everything seen so far, in discovery order
    pub visited: Vec<String>,
    pub fetched: usize,
    pub failed: usize,
}

/// Final state of a finished crawl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlSummary {
    pub host: String,
    /// Number of levels that were run
    pub levels: usize,
    pub visited: Vec<String>,
    pub stop_reason: StopReason,
    pub fetched: usize,
    pub failed: usize,
}

/// Owns the visited set and frontier for the lifetime of one crawl.
pub struct Crawler {
    config: CrawlConfig,
    ctx: LevelContext,
}

impl Crawler {
    pub fn new(seed: Seed, fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Self {
        let limit = config.concurrency.map(|n| Arc::new(Semaphore::new(n.max(1))));
        let ctx = LevelContext {
            fetcher,
            seed: Arc::new(seed),
            visited: Arc::new(VisitedSet::new()),
            frontier: Arc::new(Frontier::new()),
            limit,
        };
        ctx.frontier.push(ctx.seed.root_address());

        Self { config, ctx }
    }

    /// Runs the crawl to completion.
    ///
    /// `on_level` is called after each level that found new links, in depth order.
    pub async fn run<F>(self, mut on_level: F) -> CrawlSummary
    where
        F: FnMut(&LevelReport),
    {
        let mut depth = 0;
        let mut fetched = 0;
        let mut failed = 0;
        let mut stopped_empty = false;

        while depth < self.config.max_depth && !self.ctx.frontier.is_empty() {
            info!(
                depth = depth + 1,
                addresses = self.ctx.frontier.len(),
                known_links = self.ctx.visited.len(),
                "crawling level"
            );

            let outcome = run_level(&self.ctx).await;
            depth += 1;
            fetched += outcome.fetched;
            failed += outcome.failed;

            if outcome.discovered.is_empty() {
                info!(depth, "no new links, stopping");
                stopped_empty = true;
                break;
            }

            on_level(&LevelReport {
                depth,
                discovered: outcome.discovered,
                visited: self.ctx.visited.snapshot(),
                fetched: outcome.fetched,
                failed: outcome.failed,
            });
        }

        let stop_reason = if stopped_empty {
            StopReason::NoNewLinks
        } else if depth >= self.config.max_depth {
            StopReason::MaxDepth
        } else {
            StopReason::FrontierExhausted
        };

        CrawlSummary {
            host: self.ctx.seed.host().to_string(),
            levels: depth,
            visited: self.ctx.visited.snapshot(),
            stop_reason,
            fetched,
            failed,
        }
    }
}
