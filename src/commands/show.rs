use anyhow::Result;
use codeinsight::config::Config;

use crate::cli::InputArgs;
use crate::ui::context::UiContext;
use crate::ui::output::print_section;

pub fn cmd_show(input: &InputArgs, ui: &UiContext, config: &Config) -> Result<()> {
    let analysis = super::load_analysis(input, config)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "show",
            "summary": analysis.summary(),
            "tree": analysis.tree_text(),
        }))?;
        return Ok(());
    }

    print_section("Summary", analysis.summary(), ui.unicode);
    print_section("Directory structure", analysis.tree_text(), ui.unicode);
    Ok(())
}
