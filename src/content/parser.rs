//! File path detection for ingestion digests.
//!
//! Two passes: the strict delimited header format first, then a permissive
//! line scan when the strict pass finds nothing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{header_path, DELIMITER_MIN_WIDTH};

/// Delimiter line, one or more blank lines, `File: <path>` at line start,
/// one or more blank lines, delimiter line
static DELIMITED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?m)^={{{w},}}[ \t]*\r?\n(?:[ \t]*\r?\n)+File:([^\r\n]*)\r?\n(?:[ \t]*\r?\n)+={{{w},}}",
        w = DELIMITER_MIN_WIDTH
    );
    Regex::new(&pattern).expect("valid header pattern")
});

/// Which detection pass produced the file list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Strict `====` / `File:` / `====` headers
    Delimited,
    /// Any line starting with `File:`
    LineScan,
    /// Nothing detected
    None,
}

impl ParseStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStrategy::Delimited => "delimited",
            ParseStrategy::LineScan => "line-scan",
            ParseStrategy::None => "none",
        }
    }
}

/// Detected file paths plus the pass that found them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFiles {
    pub files: Vec<String>,
    pub strategy: ParseStrategy,
}

/// Extract the ordered, de-duplicated file paths named by section headers.
///
/// Order is first appearance; a repeated header is dropped, not moved.
pub fn parse_files(content: &str) -> Vec<String> {
    detect_files(content).files
}

/// Like [`parse_files`], also reporting which pass matched.
pub fn detect_files(content: &str) -> ParsedFiles {
    if content.is_empty() {
        return ParsedFiles {
            files: Vec::new(),
            strategy: ParseStrategy::None,
        };
    }

    let delimited = collect_unique(
        DELIMITED_HEADER
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|path| !path.is_empty()),
    );
    if !delimited.is_empty() {
        tracing::debug!(files = delimited.len(), "detected files from delimited headers");
        return ParsedFiles {
            files: delimited,
            strategy: ParseStrategy::Delimited,
        };
    }

    let scanned = collect_unique(content.lines().filter_map(header_path));
    if scanned.is_empty() {
        tracing::debug!("no file headers detected");
        return ParsedFiles {
            files: scanned,
            strategy: ParseStrategy::None,
        };
    }

    tracing::debug!(files = scanned.len(), "detected files from line scan");
    ParsedFiles {
        files: scanned,
        strategy: ParseStrategy::LineScan,
    }
}

fn collect_unique<'a>(paths: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for path in paths {
        if seen.insert(path) {
            files.push(path.to_string());
        }
    }
    files
}
