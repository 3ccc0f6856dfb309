// src/fetch/mod.rs
// =============================================================================
// The network boundary of the crawler.
//
// Submodules:
// - http: the Fetcher trait and its reqwest implementation
//
// Everything the crawl engine knows about the network is
// `fetch(address) -> body or FetchError`.
// =============================================================================

mod http;

pub use http::{Fetcher, HttpFetcher, HttpSettings};
