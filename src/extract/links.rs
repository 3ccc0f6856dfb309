// src/extract/links.rs
// =============================================================================
// This module pulls href values out of anchor tags in an HTML body.
//
// We deliberately don't build a DOM here. The crawler only needs the raw
// href strings, in document order, so a single regex scan is enough:
//
//   <a ...href="VALUE"...>      (tag and attribute names are case-insensitive)
//
// Whatever doesn't match is skipped, so broken or half-finished HTML never
// causes an error. Values are returned verbatim (no trimming, no resolving)
// and duplicates are kept; de-duplication happens in the visited set.
//
// Rust concepts:
// - lazy_static: build the Regex once, on first use, and share it
// - Iterators with lifetimes: the returned &str slices borrow from the body
// =============================================================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Group 1 = double-quoted value, group 2 = single-quoted value.
    // `[^>]*` keeps the match inside one tag.
    static ref ANCHOR_HREF: Regex = Regex::new(r#"(?i)<a\s[^>]*href=(?:"([^"]*)"|'([^']*)')"#)
        .expect("anchor href pattern is a valid regex");
}

// Lazily scans `body` for anchor href values
//
// Parameters:
//   body: the HTML text of a fetched page
//
// Returns: an iterator of link paths, in the order they appear in the page
//
// Example:
//   body = r#"<a href="/x">x</a><A HREF="/y">y</A>"#
//   result = ["/x", "/y"]
pub fn extract_links(body: &str) -> impl Iterator<Item = &str> + '_ {
    ANCHOR_HREF
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(body: &str) -> Vec<&str> {
        extract_links(body).collect()
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let body = r#"<a href="/x">x</a><a HREF='/y'>y</a><a href="/x">dup</a>"#;
        assert_eq!(collect(body), vec!["/x", "/y", "/x"]);
    }

    #[test]
    fn test_case_insensitive_tag_and_attribute() {
        let body = r#"<A class="nav" HREF="/about">About</A>"#;
        assert_eq!(collect(body), vec!["/about"]);
    }

    #[test]
    fn test_value_is_verbatim() {
        let body = r#"<a href="contact.html?q=1#top">c</a><a href="">empty</a>"#;
        assert_eq!(collect(body), vec!["contact.html?q=1#top", ""]);
    }

    #[test]
    fn test_ignores_non_anchor_tags() {
        let body = r#"<link href="/style.css"><area href="/map"><abbr href="/no">"#;
        assert!(collect(body).is_empty());
    }

    #[test]
    fn test_tolerates_broken_html() {
        let body = r#"<a href="/ok">ok</a><a href="/unterminated <a href=/bare> <a"#;
        assert_eq!(collect(body), vec!["/ok"]);
    }

    #[test]
    fn test_href_must_stay_inside_the_tag() {
        let body = r#"<a name="top">anchor</a> href="/outside""#;
        assert!(collect(body).is_empty());
    }

    #[test]
    fn test_no_anchors() {
        assert!(collect("<html><body><p>hello</p></body></html>").is_empty());
        assert!(collect("").is_empty());
    }
}
