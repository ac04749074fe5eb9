//! Non-interactive selection flags

use codeinsight::RepositoryAnalysis;

use crate::cli::SelectionArgs;

/// Apply `--none`, `--only`, `--exclude` and `--dir`, in that order.
///
/// Paths and directories that are not in the digest are skipped with a
/// warning.
pub fn apply_selection(analysis: &mut RepositoryAnalysis, args: &SelectionArgs) {
    if args.none || !args.only.is_empty() {
        analysis.deselect_all();
    }

    for path in &args.only {
        if !is_known(analysis, path) {
            tracing::warn!(path = %path, "--only names a file that is not in the digest");
            continue;
        }
        if !analysis.selection().is_selected(path) {
            analysis.toggle_file_selection(path);
        }
    }

    for path in &args.exclude {
        if !is_known(analysis, path) {
            tracing::warn!(path = %path, "--exclude names a file that is not in the digest");
            continue;
        }
        if analysis.selection().is_selected(path) {
            analysis.toggle_file_selection(path);
        }
    }

    for dir in &args.dirs {
        if !analysis.toggle_directory(dir) {
            tracing::warn!(dir = %dir, "--dir names a directory that is not in the digest");
        }
    }

    tracing::debug!(
        selected = analysis.selection().selected_count(),
        total = analysis.selection().total_count(),
        "selection applied"
    );
}

fn is_known(analysis: &RepositoryAnalysis, path: &str) -> bool {
    analysis.available_files().iter().any(|f| f == path)
}
