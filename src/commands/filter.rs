use anyhow::Result;
use codeinsight::config::Config;

use crate::cli::{InputArgs, SelectionArgs};
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, paint};

use super::selection::apply_selection;
use super::Destination;

pub fn cmd_filter(
    input: &InputArgs,
    selection: &SelectionArgs,
    dest: Destination<'_>,
    ui: &UiContext,
    config: &Config,
) -> Result<()> {
    let mut analysis = super::load_analysis(input, config)?;
    apply_selection(&mut analysis, selection);

    let content = analysis.filtered_content();
    emit_filtered(&content, &analysis.selected_files(), dest, ui)
}

/// Shared by `filter` and `select`: write the content, then report
pub(crate) fn emit_filtered(
    content: &str,
    selected: &[String],
    dest: Destination<'_>,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        if dest != Destination::Stdout {
            super::write_content(content, dest)?;
        }
        let output = match dest {
            Destination::File(path) => Some(path.display().to_string()),
            _ => None,
        };
        let inline = (dest == Destination::Stdout).then_some(content);
        crate::ui::json::emit(serde_json::json!({
            "event": "filter",
            "selected": selected,
            "bytes": content.len(),
            "output": output,
            "copied": dest == Destination::Clipboard,
            "content": inline,
        }))?;
        return Ok(());
    }

    super::write_content(content, dest)?;

    let target = match dest {
        Destination::Stdout => return Ok(()),
        Destination::File(path) => path.display().to_string(),
        Destination::Clipboard => "the clipboard".to_string(),
    };
    let verb = if dest == Destination::Clipboard {
        "Copied"
    } else {
        "Wrote"
    };
    eprintln!(
        "{} {} {} selected file(s), {} bytes, to {}",
        paint(
            icon(ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS),
            colors::SUCCESS,
            ui.color
        ),
        verb,
        selected.len(),
        content.len(),
        target
    );
    Ok(())
}
