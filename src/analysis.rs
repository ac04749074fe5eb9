//! Repository analysis state
//!
//! `RepositoryAnalysis` is the one state holder every view goes through: it
//! keeps the loaded ingestion result, the detected files, their tree and the
//! current selection, and recomputes the filtered digest on demand.

use crate::content::{
    build_tree, detect_files, filtered_content, FileTreeNode, ParseStrategy, SelectionState,
    SelectionStore,
};
use crate::models::RepositoryIngestResult;

/// Loaded ingestion result plus derived file list, tree and selection
#[derive(Debug, Clone)]
pub struct RepositoryAnalysis {
    result: Option<RepositoryIngestResult>,
    strategy: ParseStrategy,
    file_tree: FileTreeNode,
    selection: SelectionStore,
}

impl Default for RepositoryAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryAnalysis {
    /// Empty analysis: no files, empty tree, empty output
    pub fn new() -> Self {
        Self {
            result: None,
            strategy: ParseStrategy::None,
            file_tree: FileTreeNode::default(),
            selection: SelectionStore::default(),
        }
    }

    /// Analysis over one ingestion result
    pub fn from_result(result: RepositoryIngestResult) -> Self {
        let mut analysis = Self::new();
        analysis.load(result);
        analysis
    }

    /// Install a new ingestion result.
    ///
    /// The digest is re-parsed and the selection reset to all files only when
    /// the content differs from what is loaded. Returns whether it did.
    pub fn load(&mut self, result: RepositoryIngestResult) -> bool {
        let unchanged = self
            .result
            .as_ref()
            .is_some_and(|current| current.content == result.content);
        if unchanged {
            self.result = Some(result);
            return false;
        }

        let parsed = detect_files(&result.content);
        tracing::debug!(
            files = parsed.files.len(),
            strategy = parsed.strategy.as_str(),
            "loaded new digest, selection reset"
        );
        self.strategy = parsed.strategy;
        self.file_tree = build_tree(&parsed.files);
        self.selection.replace_universe(parsed.files);
        self.result = Some(result);
        true
    }

    /// Drop the loaded result
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn result(&self) -> Option<&RepositoryIngestResult> {
        self.result.as_ref()
    }

    /// Opaque summary text ("" when nothing is loaded)
    pub fn summary(&self) -> &str {
        self.result.as_ref().map_or("", |r| r.summary.as_str())
    }

    /// Opaque pre-rendered tree text ("" when nothing is loaded)
    pub fn tree_text(&self) -> &str {
        self.result.as_ref().map_or("", |r| r.file_tree.as_str())
    }

    /// Which detection pass produced the file list
    pub fn strategy(&self) -> ParseStrategy {
        self.strategy
    }

    /// Detected files, in digest order
    pub fn available_files(&self) -> &[String] {
        self.selection.universe()
    }

    /// True when no file was detected (the "no files detected" state)
    pub fn has_no_files(&self) -> bool {
        self.available_files().is_empty()
    }

    /// Selected files, in digest order
    pub fn selected_files(&self) -> Vec<String> {
        self.selection.selected_files()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn file_tree(&self) -> &FileTreeNode {
        &self.file_tree
    }

    pub fn toggle_file_selection(&mut self, path: &str) {
        self.selection.toggle_file(path);
    }

    pub fn toggle_select_all(&mut self) {
        self.selection.toggle_select_all();
    }

    pub fn select_all(&mut self) {
        self.selection.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Bulk toggle with a caller-computed fully-selected flag
    pub fn toggle_directory_files(&mut self, dir_files: &[String], currently_fully_selected: bool) {
        self.selection
            .toggle_directory(dir_files, currently_fully_selected);
    }

    /// Toggle the subtree at `dir_path` based on its current state.
    ///
    /// Returns false when no such directory exists.
    pub fn toggle_directory(&mut self, dir_path: &str) -> bool {
        let Some(files) = self.file_tree.find_dir(dir_path).map(|d| d.all_files()) else {
            return false;
        };
        let fully_selected = self.selection.is_fully_selected(&files);
        self.selection.toggle_directory(&files, fully_selected);
        true
    }

    /// Every file path under `node`
    pub fn files_in_dir(&self, node: &FileTreeNode) -> Vec<String> {
        node.all_files()
    }

    /// Tri-state of a directory node
    pub fn directory_state(&self, node: &FileTreeNode) -> SelectionState {
        self.selection.selection_state(&node.all_files())
    }

    /// The digest limited to the selected sections ("" when nothing is loaded)
    pub fn filtered_content(&self) -> String {
        match &self.result {
            Some(result) => filtered_content(
                &result.content,
                self.selection.selected(),
                self.selection.universe(),
            ),
            None => String::new(),
        }
    }
}
