// src/crawl/seed.rs
// =============================================================================
// The seed host and the addresses derived from it.
//
// Address rule:
//   seed page      -> "http://" + host
//   any link path  -> "http://" + host + path     (plain concatenation)
//
// No resolving of "..", no handling of absolute hrefs: an href like
// "https://other.site/" turns into a nonsense address, the fetch fails, and
// the crawler logs it and moves on.
// =============================================================================

use crate::error::InputError;
use url::Url;

/// Plain transport, default port.
pub const SCHEME: &str = "http://";

/// A validated bare host (optionally with a port) to crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    host: String,
}

impl Seed {
    // Validates the command-line host argument
    //
    // Accepted:  "example.com", "localhost:8080", "10.0.0.1"
    // Rejected:  "", "http://example.com", "example.com/docs", "a b.com"
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let host = raw.trim();
        let invalid = |reason: &str| InputError::InvalidHost {
            host: raw.to_string(),
            reason: reason.to_string(),
        };

        if host.is_empty() {
            return Err(InputError::MissingHost);
        }
        if host.contains("://") {
            return Err(invalid("give a bare host without a scheme"));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(invalid("host contains whitespace"));
        }
        if host.contains(['/', '?', '#', '@']) {
            return Err(invalid("expected a bare host, not a path, query or credentials"));
        }

        let parsed = Url::parse(&format!("{}{}", SCHEME, host))
            .map_err(|e| invalid(&e.to_string()))?;
        if parsed.host_str().is_none() {
            return Err(invalid("no host name found"));
        }

        Ok(Self {
            host: host.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The address of the seed page itself.
    pub fn root_address(&self) -> String {
        format!("{}{}", SCHEME, self.host)
    }

    /// The address a discovered link path points at.
    pub fn address_for(&self, path: &str) -> String {
        format!("{}{}{}", SCHEME, self.host, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_hosts() {
        assert_eq!(Seed::parse("example.com").unwrap().host(), "example.com");
        assert_eq!(Seed::parse("localhost:8080").unwrap().host(), "localhost:8080");
        assert_eq!(Seed::parse(" 10.0.0.1 ").unwrap().host(), "10.0.0.1");
    }

    #[test]
    fn test_empty_host_is_missing() {
        assert_eq!(Seed::parse("").unwrap_err(), InputError::MissingHost);
        assert_eq!(Seed::parse("   ").unwrap_err(), InputError::MissingHost);
    }

    #[test]
    fn test_rejects_malformed_hosts() {
        for raw in [
            "http://example.com",
            "example.com/docs",
            "exa mple.com",
            "user@example.com",
            "example.com:notaport",
            "example.com?x=1",
        ] {
            let err = Seed::parse(raw).unwrap_err();
            assert!(
                matches!(err, InputError::InvalidHost { .. }),
                "{} should be invalid, got {:?}",
                raw,
                err
            );
        }
    }

    #[test]
    fn test_addresses_are_concatenated() {
        let seed = Seed::parse("example.com").unwrap();
        assert_eq!(seed.root_address(), "http://example.com");
        assert_eq!(seed.address_for("/about"), "http://example.com/about");
        // No normalization: relative paths are glued on as-is
        assert_eq!(seed.address_for("contact.html"), "http://example.comcontact.html");
    }
}
