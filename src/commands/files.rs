use anyhow::Result;
use codeinsight::config::Config;

use crate::cli::InputArgs;
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, paint};

pub fn cmd_files(input: &InputArgs, ui: &UiContext, config: &Config) -> Result<()> {
    let analysis = super::load_analysis(input, config)?;
    let files = analysis.available_files();

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "files",
            "strategy": analysis.strategy().as_str(),
            "count": files.len(),
            "files": files,
        }))?;
        return Ok(());
    }

    if analysis.has_no_files() {
        println!("No files detected in the digest.");
        println!(
            "{}",
            paint(
                "Expected sections headed by a 'File: <path>' line.",
                colors::DIM,
                ui.color
            )
        );
        return Ok(());
    }

    for path in files {
        println!("{}", path);
    }
    if ui.verbose > 0 {
        eprintln!(
            "{}",
            paint(
                &format!(
                    "{} files ({} headers)",
                    files.len(),
                    analysis.strategy().as_str()
                ),
                colors::DIM,
                ui.color
            )
        );
    }
    Ok(())
}
