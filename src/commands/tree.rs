use anyhow::Result;
use codeinsight::config::Config;

use crate::cli::{InputArgs, SelectionArgs};
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};
use crate::ui::widgets::file_tree::render_static_tree;

use super::selection::apply_selection;

pub fn cmd_tree(
    input: &InputArgs,
    selection: &SelectionArgs,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    let mut analysis = super::load_analysis(input, config)?;
    apply_selection(&mut analysis, selection);

    let store = analysis.selection();
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "tree",
            "selected": store.selected_count(),
            "total": store.total_count(),
            "selected_files": analysis.selected_files(),
            "tree": serde_json::to_value(analysis.file_tree())?,
        }))?;
        return Ok(());
    }

    if analysis.has_no_files() {
        println!("No files detected in the digest.");
        return Ok(());
    }

    println!(
        "{} {}",
        icon(ui.unicode, icons::REPO, icons_ascii::REPO),
        paint(
            &format!(
                "{}/{} files selected",
                store.selected_count(),
                store.total_count()
            ),
            colors::INFO,
            ui.color
        )
    );
    println!();
    print!("{}", render_static_tree(&analysis, ui.unicode));
    Ok(())
}
