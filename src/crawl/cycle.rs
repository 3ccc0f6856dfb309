// src/crawl/cycle.rs
// =============================================================================
// One level of the crawl: fetch everything in the frontier, in parallel.
//
// How it works:
// 1. Drain the frontier (anything pushed from now on is for the next level)
// 2. Spawn one tokio task per address
// 3. Each task fetches its page, extracts links, and for every link that the
//    visited set hasn't seen yet, pushes its address onto the frontier
// 4. Wait for ALL tasks (success, failure or panic) before returning
//
// Step 4 is the level barrier: the caller can only start level N+1 after
// every level-N discovery has landed in the visited set and the frontier.
//
// Failures never escape this module. A failed fetch counts as a page with
// zero links; a panicked task is logged as an internal error.
//
// Rust concepts:
// - Arc: shared ownership of the fetcher and crawl state across tasks
// - tokio::spawn + join_all: fan out, then fan back in
// - Semaphore: optional cap on how many fetches run at once
// =============================================================================

use super::frontier::Frontier;
use super::seed::Seed;
use super::visited::VisitedSet;
use crate::error::CrawlError;
use crate::extract::extract_links;
use crate::fetch::Fetcher;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

/// What one level produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LevelOutcome {
    /// Link paths seen for the first time during this level
    pub discovered: Vec<String>,
    /// Fetches that returned a body
    pub fetched: usize,
    /// Fetches that failed (network, status, content type, internal)
    pub failed: usize,
}

// Result of one fetch task
struct PageOutcome {
    discovered: Vec<String>,
    ok: bool,
}

/// Everything a level needs, shared with the tasks it spawns.
#[derive(Clone)]
pub struct LevelContext {
    pub fetcher: Arc<dyn Fetcher>,
    pub seed: Arc<Seed>,
    pub visited: Arc<VisitedSet>,
    pub frontier: Arc<Frontier>,
    pub limit: Option<Arc<Semaphore>>,
}

// Feeds one page body through the extractor and merges new links
//
// Returns the paths that were new, in the order they appeared in the page.
// Each returned path has had exactly one address pushed onto the frontier.
pub fn merge_links(body: &str, seed: &Seed, visited: &VisitedSet, frontier: &Frontier) -> Vec<String> {
    let mut discovered = Vec::new();

    for path in extract_links(body) {
        if visited.insert_if_absent(path) {
            frontier.push(seed.address_for(path));
            discovered.push(path.to_string());
        }
    }

    discovered
}

/// Runs one fetch-extract-merge level over the current frontier.
pub async fn run_level(ctx: &LevelContext) -> LevelOutcome {
    let addresses = ctx.frontier.take_all();
    debug!(count = addresses.len(), "starting level");

    let tasks: Vec<_> = addresses
        .into_iter()
        .map(|address| {
            let ctx = ctx.clone();
            tokio::spawn(async move { fetch_page(ctx, address).await })
        })
        .collect();

    let mut outcome = LevelOutcome::default();

    for joined in join_all(tasks).await {
        match joined.map_err(CrawlError::from).and_then(|page| page) {
            Ok(page) => {
                if page.ok {
                    outcome.fetched += 1;
                } else {
                    outcome.failed += 1;
                }
                outcome.discovered.extend(page.discovered);
            }
            Err(e) => {
                error!("{}", e);
                outcome.failed += 1;
            }
        }
    }

    outcome
}

async fn fetch_page(ctx: LevelContext, address: String) -> Result<PageOutcome, CrawlError> {
    // Held until this task returns
    let _permit = match &ctx.limit {
        Some(limit) => Some(
            Arc::clone(limit)
                .acquire_owned()
                .await
                .map_err(|e| CrawlError::Internal(format!("concurrency limit: {}", e)))?,
        ),
        None => None,
    };

    match ctx.fetcher.fetch(&address).await {
        Ok(body) => {
            let discovered = merge_links(&body, &ctx.seed, &ctx.visited, &ctx.frontier);
            debug!(%address, new_links = discovered.len(), "fetched");
            Ok(PageOutcome {
                discovered,
                ok: true,
            })
        }
        Err(e) => {
            warn!("Failed to fetch {}: {}", address, e);
            Ok(PageOutcome {
                discovered: Vec::new(),
                ok: false,
            })
        }
    }
}
