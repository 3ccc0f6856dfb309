// src/fetch/http.rs
// =============================================================================
// This module fetches page bodies over HTTP.
//
// Key functionality:
// - A `Fetcher` trait: "give me the body at this address, or tell me why not"
// - `HttpFetcher`: the real implementation, built on one shared reqwest Client
// - Sorts every failure (timeout, bad status, non-text body, ...) into a
//   FetchError so the crawl engine can log it and move on
//
// The engine only ever sees the trait. That keeps the crawl loop testable
// without a network: tests plug in an in-memory site instead.
//
// Rust concepts:
// - async-trait: async methods in a trait object (dyn Fetcher)
// - Send + Sync: the fetcher is shared across tokio tasks through an Arc
// =============================================================================

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Anything that can turn an address into a page body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<String, FetchError>;
}

/// Settings for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Upper bound for one request, connect + headers + body
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("level-crawler/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches pages with reqwest.
///
/// The Client is created once and reused for every request of the crawl
/// (connection pooling); cloning the fetcher is cheap.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &HttpSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<String, FetchError> {
        debug!(address, "fetching");

        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // No content-type at all is treated as text, like a browser would
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_textual(content_type) {
                return Err(FetchError::NotText(content_type.to_string()));
            }
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}

// Decides whether a Content-Type header describes something we can scan
//
// Examples:
//   "text/html; charset=utf-8" -> true
//   "application/xhtml+xml"    -> true
//   "image/png"                -> false
fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("text/")
        || mime.contains("html")
        || mime.contains("xml")
        || mime.contains("json")
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Request timeout
// - DNS resolution failure / connection refused
// - Too many redirects
// - A malformed address (e.g. an href that doesn't glue onto the host)
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else if error.is_redirect() {
        FetchError::Transport("too many redirects".to_string())
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(error.to_string())
    } else {
        FetchError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_content_types() {
        assert!(is_textual("text/html"));
        assert!(is_textual("text/html; charset=UTF-8"));
        assert!(is_textual("TEXT/PLAIN"));
        assert!(is_textual("application/xhtml+xml"));
        assert!(is_textual("application/json"));
    }

    #[test]
    fn test_binary_content_types() {
        assert!(!is_textual("image/png"));
        assert!(!is_textual("application/octet-stream"));
        assert!(!is_textual("application/pdf"));
    }

    #[test]
    fn test_default_settings() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(settings.user_agent.starts_with("level-crawler/"));
    }

    #[tokio::test]
    async fn test_malformed_address_is_a_fetch_error() {
        let fetcher = HttpFetcher::new(&HttpSettings::default()).unwrap();
        // Simple concatenation of host + relative href can produce this
        let result = fetcher.fetch("http://example.comcontact .html:port").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_fetch_error() {
        let settings = HttpSettings {
            timeout: Duration::from_secs(2),
            ..HttpSettings::default()
        };
        let fetcher = HttpFetcher::new(&settings).unwrap();
        // Port 9 (discard) on localhost is almost never listening
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(result.is_err());
    }
}
