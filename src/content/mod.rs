//! Ingestion digest handling
//!
//! A digest is one text blob holding every ingested file as a delimited
//! section:
//!
//! ```text
//! ==================================================
//!
//! File: src/main.rs
//!
//! ==================================================
//! fn main() {}
//! ```
//!
//! # Module Structure
//!
//! - `parser` - file path detection from section headers
//! - `tree` - directory tree built from the detected paths
//! - `selection` - the set of files currently chosen for display/export
//! - `filter` - digest reconstruction limited to the selected sections

mod filter;
mod parser;
mod selection;
mod tree;

pub use filter::{filtered_content, section_spans, SectionSpan};
pub use parser::{detect_files, parse_files, ParseStrategy, ParsedFiles};
pub use selection::{SelectionState, SelectionStore};
pub use tree::{build_tree, FileLeaf, FileTreeNode};

/// Literal token that opens a section header line
pub const FILE_HEADER_TOKEN: &str = "File:";

/// Minimum width of a delimiter line for the strict header format
pub const DELIMITER_MIN_WIDTH: usize = 50;

/// Strip the header token from a trimmed line, returning the trimmed path.
///
/// Returns `None` when the line is not a header or names an empty path.
pub(crate) fn header_path(line: &str) -> Option<&str> {
    let path = line.trim().strip_prefix(FILE_HEADER_TOKEN)?.trim();
    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}
