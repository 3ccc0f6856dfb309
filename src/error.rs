// src/error.rs
// =============================================================================
// Typed errors for the crawler.
//
// Every failure belongs to exactly one of these groups:
// - InputError: the seed host given on the command line is unusable.
//   This is the only kind that stops the program (before crawling starts).
// - FetchError: one address could not be turned into a page body.
//   The crawl treats it as "this page had zero links" and keeps going.
// - CrawlError: something went wrong inside the engine itself (a fetch task
//   panicked, a permit could not be acquired). Logged, then the level goes on.
//
// Link extraction has no error type at all: text that doesn't match the
// anchor pattern is simply skipped.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from #[error(...)]
// - Enums with data: each variant carries the details of its failure
// =============================================================================

use thiserror::Error;

/// Problems with the seed host supplied by the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no host given; usage: level-crawler <HOST> (e.g. example.com)")]
    MissingHost,

    #[error("invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },
}

impl InputError {
    /// Process exit code for this class of input problem.
    ///
    /// 2 = the host is malformed, 3 = there was no host at all.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::InvalidHost { .. } => 2,
            InputError::MissingHost => 3,
        }
    }
}

/// Why a single address produced no body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("response is not text (content-type: {0})")]
    NotText(String),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Transport(String),
}

/// Faults inside the engine that are not tied to the remote site.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tokio::task::JoinError> for CrawlError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            CrawlError::Internal(format!("fetch task panicked: {}", err))
        } else {
            CrawlError::Internal(format!("fetch task cancelled: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_exit_codes_are_distinct() {
        let invalid = InputError::InvalidHost {
            host: "http://x".to_string(),
            reason: "scheme not allowed".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(InputError::MissingHost.exit_code(), 3);
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
