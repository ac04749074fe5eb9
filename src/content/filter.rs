//! Digest reconstruction for a partial selection.
//!
//! The digest is cut into line spans, one per `File:` header line. A span
//! starts at the delimiter line leading its header and runs until the line
//! before the next span starts (or the end of the digest). Kept spans are
//! copied verbatim and joined by a single blank line.

use std::collections::HashSet;

use super::header_path;

/// Line range of one section within the digest (inclusive, 0-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub filename: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Rebuild the digest keeping only the sections named in `selection`.
///
/// A selection as large as the universe returns `raw` untouched; an empty
/// selection returns an empty string.
pub fn filtered_content(raw: &str, selection: &HashSet<String>, universe: &[String]) -> String {
    if selection.len() == universe.len() {
        return raw.to_string();
    }
    if selection.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let kept: Vec<String> = spans_for(&lines)
        .into_iter()
        .filter(|span| selection.contains(&span.filename))
        .map(|span| lines[span.start_line..=span.end_line].join("\n"))
        .collect();

    tracing::debug!(
        sections = kept.len(),
        selected = selection.len(),
        "filtered digest"
    );
    kept.join("\n\n")
}

/// Compute the ordered section spans of a digest.
///
/// A span opens at the delimiter above its header, past any blank lines, so
/// a kept section carries its whole `====` / `File:` / `====` block. Starting
/// one line above the header would drop that delimiter whenever blank lines
/// surround `File:`.
pub fn section_spans(raw: &str) -> Vec<SectionSpan> {
    let lines: Vec<&str> = raw.split('\n').collect();
    spans_for(&lines)
}

fn spans_for(lines: &[&str]) -> Vec<SectionSpan> {
    let mut spans: Vec<SectionSpan> = Vec::new();
    let mut prev_header: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let Some(filename) = header_path(line) else {
            continue;
        };

        // Never reach back into the previous header line
        let floor = prev_header.map_or(0, |h| h + 1);
        let start = leading_line(lines, i).max(floor);

        if let Some(last) = spans.last_mut() {
            last.end_line = start - 1;
        }
        spans.push(SectionSpan {
            filename: filename.to_string(),
            start_line: start,
            end_line: lines.len() - 1,
        });
        prev_header = Some(i);
    }

    spans
}

/// First line of the header block for the `File:` line at `header`.
///
/// That is the delimiter above it (skipping blank lines), or the line right
/// above the header when no delimiter is found.
fn leading_line(lines: &[&str], header: usize) -> usize {
    let mut i = header;
    while i > 0 && lines[i - 1].trim().is_empty() {
        i -= 1;
    }
    if i > 0 && is_delimiter_line(lines[i - 1]) {
        i - 1
    } else {
        header.saturating_sub(1)
    }
}

fn is_delimiter_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '=')
}
