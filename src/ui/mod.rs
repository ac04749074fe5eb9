//! Terminal presentation for the CodeInsight CLI
//!
//! - `context` - resolved output settings for one run
//! - `error` - error reporting for failed commands
//! - `terminal` - capability detection
//! - `theme` - icons and colors
//! - `json` - NDJSON event output
//! - `output` - shared text output helpers
//! - `widgets` - interactive file tree

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
