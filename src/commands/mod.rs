//! Command handlers
//!
//! Each handler loads its input through the library, then renders text or
//! NDJSON according to the `UiContext`.

pub mod files;
pub mod filter;
pub mod repos;
pub mod select;
pub mod selection;
pub mod show;
pub mod tree;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use codeinsight::config::Config;
use codeinsight::{load_source, RepositoryAnalysis};

use crate::cli::InputArgs;

pub use files::cmd_files;
pub use filter::cmd_filter;
pub use repos::cmd_repos;
pub use select::cmd_select;
pub use show::cmd_show;
pub use tree::cmd_tree;

/// Load the ingestion result named by `input` into a fresh analysis
pub(crate) fn load_analysis(input: &InputArgs, config: &Config) -> Result<RepositoryAnalysis> {
    let store_dir = config.ingest_dir();
    let result = load_source(&input.input, input.repo.as_deref(), &store_dir)
        .with_context(|| format!("failed to load '{}'", input.input))?;
    Ok(RepositoryAnalysis::from_result(result))
}

/// Where filtered content goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    Stdout,
    File(&'a Path),
    Clipboard,
}

impl<'a> Destination<'a> {
    pub fn new(output: Option<&'a Path>, copy: bool) -> Self {
        match (output, copy) {
            (_, true) => Destination::Clipboard,
            (Some(path), false) => Destination::File(path),
            (None, false) => Destination::Stdout,
        }
    }
}

/// Write filtered content verbatim to its destination
pub(crate) fn write_content(content: &str, dest: Destination<'_>) -> Result<()> {
    match dest {
        Destination::File(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        Destination::Clipboard => copy_to_clipboard(content),
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Put `text` on the system clipboard.
///
/// On X11 and Wayland the text stays available after exit only while a
/// clipboard manager is running.
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("failed to access the system clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to copy the filtered digest to the clipboard")?;
    tracing::debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}
