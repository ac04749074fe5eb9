use anyhow::{bail, Result};
use codeinsight::config::Config;

use crate::cli::InputArgs;
use crate::ui::context::UiContext;
use crate::ui::widgets::file_tree::{run_interactive, TreeMenu, TreeOutcome};

use super::filter::emit_filtered;
use super::Destination;

pub fn cmd_select(
    input: &InputArgs,
    dest: Destination<'_>,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    if !ui.interactive() {
        bail!("'select' needs an interactive terminal; use 'filter' with --only/--exclude/--dir instead");
    }
    if input.input == "-" {
        bail!("'select' reads keys from the terminal, so the digest cannot come from stdin");
    }

    let analysis = super::load_analysis(input, config)?;
    let mut menu = TreeMenu::new(analysis, config.tree.expand_depth);

    let title = format!("CodeInsight: {}", input.input);
    let dest = match run_interactive(&mut menu, &title, ui.unicode)? {
        TreeOutcome::Cancelled => {
            tracing::info!("selection cancelled");
            eprintln!("Selection cancelled.");
            return Ok(());
        }
        // `y` in the tree copies no matter where output was headed
        TreeOutcome::Copy => Destination::Clipboard,
        TreeOutcome::Confirmed => dest,
    };

    let analysis = menu.into_analysis();
    let content = analysis.filtered_content();
    emit_filtered(&content, &analysis.selected_files(), dest, ui)
}
