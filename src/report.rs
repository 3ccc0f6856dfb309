// src/report.rs
// =============================================================================
// Console output for crawl results (stdout only; diagnostics go to stderr).
//
// Text mode, after each level that found something new:
//
//   Depth: 2
//   [/about, /contact, /]
//
// The trailing "/" is always printed, so an empty set shows as "[/]".
//
// JSON mode prints one object per line: a "level" object per report and a
// final "summary" object, so the output can be piped into jq.
// =============================================================================

use crate::crawl::{CrawlSummary, LevelReport};
use serde::Serialize;

// Formats link paths as "[a, b, c, /]"
pub fn format_link_list(links: &[String]) -> String {
    let mut out = String::from("[");
    for link in links {
        out.push_str(link);
        out.push_str(", ");
    }
    out.push_str("/]");
    out
}

pub fn format_level(report: &LevelReport) -> String {
    format!("Depth: {}\n{}", report.depth, format_link_list(&report.visited))
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonLine<'a> {
    Level(&'a LevelReport),
    Summary(&'a CrawlSummary),
}

pub fn level_json(report: &LevelReport) -> serde_json::Result<String> {
    serde_json::to_string(&JsonLine::Level(report))
}

pub fn summary_json(summary: &CrawlSummary) -> serde_json::Result<String> {
    serde_json::to_string(&JsonLine::Summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::StopReason;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_link_list_format() {
        assert_eq!(format_link_list(&strings(&["/about", "/contact"])), "[/about, /contact, /]");
    }

    #[test]
    fn test_empty_link_list_is_sentinel_only() {
        assert_eq!(format_link_list(&[]), "[/]");
    }

    #[test]
    fn test_level_text() {
        let report = LevelReport {
            depth: 2,
            discovered: strings(&["/b"]),
            visited: strings(&["/a", "/b"]),
            fetched: 1,
            failed: 0,
        };
        assert_eq!(format_level(&report), "Depth: 2\n[/a, /b, /]");
    }

    #[test]
    fn test_json_lines_are_tagged() {
        let report = LevelReport {
            depth: 1,
            discovered: strings(&["/a"]),
            visited: strings(&["/a"]),
            fetched: 1,
            failed: 0,
        };
        let line: serde_json::Value = serde_json::from_str(&level_json(&report).unwrap()).unwrap();
        assert_eq!(line["type"], "level");
        assert_eq!(line["depth"], 1);
        assert_eq!(line["visited"][0], "/a");

        let summary = CrawlSummary {
            host: "example.com".to_string(),
            levels: 1,
            visited: strings(&["/a"]),
            stop_reason: StopReason::NoNewLinks,
            fetched: 1,
            failed: 0,
        };
        let line: serde_json::Value = serde_json::from_str(&summary_json(&summary).unwrap()).unwrap();
        assert_eq!(line["type"], "summary");
        assert_eq!(line["stop_reason"], "no_new_links");
        assert_eq!(line["host"], "example.com");
    }
}
