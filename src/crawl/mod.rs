// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Features:
// - Level-by-level (breadth-first) crawling from a seed host
// - All pages of a level are fetched concurrently, then joined (the barrier)
// - One shared visited set decides which links are new
// - Stops at the depth bound, when the frontier runs dry, or as soon as a
//   level finds nothing new
//
// Submodules:
// - seed:     host validation and address building
// - visited:  the set of link paths seen so far
// - frontier: the addresses queued for the next level
// - cycle:    one level of fetch -> extract -> merge
// - engine:   the loop that drives the levels
// =============================================================================

mod cycle;
mod engine;
mod frontier;
mod seed;
mod visited;

pub use engine::{CrawlConfig, CrawlSummary, Crawler, LevelReport, StopReason, MAX_DEPTH};
pub use seed::Seed;
