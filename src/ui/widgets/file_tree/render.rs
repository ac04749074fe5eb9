//! Terminal rendering functions for the file tree.

use codeinsight::{FileTreeNode, RepositoryAnalysis, SelectionState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::{join_key, FlattenedNode, RowKind};

fn state_icon(state: SelectionState, unicode: bool) -> &'static str {
    match state {
        SelectionState::Selected => icon(unicode, icons::SELECTED, icons_ascii::SELECTED),
        SelectionState::Unselected => icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED),
        SelectionState::Partial => icon(unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    }
}

fn count_suffix(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => " (1 file)".to_string(),
        n => format!(" ({} files)", n),
    }
}

/// Render a single row of the interactive tree
pub fn render_tree_node(node: &FlattenedNode, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active { "> " } else { "  " };

    let (expand_icon, label, suffix) = match node.kind {
        RowKind::Dir => {
            let expand = if !node.has_children {
                "  ".to_string()
            } else if node.expanded {
                format!("{} ", icon(supports_unicode, icons::EXPAND, icons_ascii::EXPAND))
            } else {
                format!("{} ", icon(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE))
            };
            (expand, format!("{}/", node.label), count_suffix(node.file_count))
        }
        RowKind::File => ("  ".to_string(), node.label.clone(), String::new()),
    };

    format!(
        "{}{}{}{} {}{}",
        cursor,
        indent,
        expand_icon,
        state_icon(node.state, supports_unicode),
        label,
        suffix
    )
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, supports_unicode: bool) -> String {
    format!(
        "Selected: {}/{} files\n\n{} = selected    {} = partial    {} = not selected",
        selected,
        total,
        state_icon(SelectionState::Selected, supports_unicode),
        state_icon(SelectionState::Partial, supports_unicode),
        state_icon(SelectionState::Unselected, supports_unicode),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All/None    [n] None    [Enter] Confirm    [y] Copy    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    )
}

/// Clip a line to `width` terminal columns
pub fn fit_width(line: &str, width: usize) -> String {
    if line.width() <= width {
        return line.to_string();
    }

    let mut used = 0;
    let mut out = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Render the whole tree, every directory open, without a cursor column
pub fn render_static_tree(analysis: &RepositoryAnalysis, supports_unicode: bool) -> String {
    let mut out = String::new();
    static_dir(analysis, analysis.file_tree(), "", 0, supports_unicode, &mut out);
    out
}

fn static_dir(
    analysis: &RepositoryAnalysis,
    node: &FileTreeNode,
    prefix: &str,
    depth: usize,
    unicode: bool,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);

    for dir in &node.dirs {
        let key = join_key(prefix, &dir.name);
        out.push_str(&format!(
            "{}{} {}/{}\n",
            indent,
            state_icon(analysis.directory_state(dir), unicode),
            dir.name,
            count_suffix(dir.file_count())
        ));
        static_dir(analysis, dir, &key, depth + 1, unicode, out);
    }

    for file in &node.files {
        let state = if analysis.selection().is_selected(&file.path) {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        };
        out.push_str(&format!("{}{} {}\n", indent, state_icon(state, unicode), file.name));
    }
}
