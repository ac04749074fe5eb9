//! TreeMenu state management and action handling.

use std::collections::HashSet;

use codeinsight::{FileTreeNode, RepositoryAnalysis, SelectionState};

use super::render::{render_help_bar, render_status_bar, render_tree_node};

/// What a row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Dir,
    File,
}

/// A visible row of the tree
#[derive(Debug, Clone)]
pub struct FlattenedNode {
    pub kind: RowKind,
    /// Directory key (`a/b`) for dirs, the original file path for files
    pub path: String,
    /// Key of the containing directory ("" at the root)
    pub parent: String,
    /// Depth level (0 = top level)
    pub depth: usize,
    pub label: String,
    pub state: SelectionState,
    pub expanded: bool,
    pub has_children: bool,
    /// Files in this subtree (1 for a file row)
    pub file_count: usize,
}

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    /// Toggle the file or directory under the cursor
    Toggle,
    Expand,
    Collapse,
    /// Select everything, or clear everything when all is already selected
    SelectAll,
    SelectNone,
    Confirm,
    /// Confirm and send the result to the clipboard
    Copy,
    Quit,
}

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOutcome {
    Confirmed,
    Copy,
    Cancelled,
}

/// Interactive tree menu over a repository analysis
pub struct TreeMenu {
    analysis: RepositoryAnalysis,
    expanded: HashSet<String>,
    /// Current cursor position in flattened view
    pub cursor: usize,
    flattened: Vec<FlattenedNode>,
}

impl TreeMenu {
    /// Directories shallower than `expand_depth` start expanded
    pub fn new(analysis: RepositoryAnalysis, expand_depth: usize) -> Self {
        let mut expanded = HashSet::new();
        collect_dir_keys(analysis.file_tree(), "", 0, expand_depth, &mut expanded);

        let mut menu = Self {
            analysis,
            expanded,
            cursor: 0,
            flattened: Vec::new(),
        };
        menu.rebuild_flattened();
        menu
    }

    /// Rebuild the flattened node list
    pub fn rebuild_flattened(&mut self) {
        let mut rows = Vec::new();
        flatten_dir(
            &self.analysis,
            &self.expanded,
            self.analysis.file_tree(),
            "",
            0,
            &mut rows,
        );
        self.flattened = rows;

        if !self.flattened.is_empty() && self.cursor >= self.flattened.len() {
            self.cursor = self.flattened.len() - 1;
        }
    }

    pub fn flattened_nodes(&self) -> &[FlattenedNode] {
        &self.flattened
    }

    pub fn into_analysis(self) -> RepositoryAnalysis {
        self.analysis
    }

    /// Handle a tree action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.flattened.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(row) = self.current() {
                    let (kind, path) = (row.kind, row.path.clone());
                    match kind {
                        RowKind::Dir => {
                            self.analysis.toggle_directory(&path);
                        }
                        RowKind::File => self.analysis.toggle_file_selection(&path),
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Expand => {
                if let Some(row) = self.current() {
                    if row.kind == RowKind::Dir && row.has_children {
                        let path = row.path.clone();
                        self.expanded.insert(path);
                    }
                }
                self.rebuild_flattened();
                false
            }
            TreeAction::Collapse => {
                self.collapse_current();
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectAll => {
                self.analysis.toggle_select_all();
                self.rebuild_flattened();
                false
            }
            TreeAction::SelectNone => {
                self.analysis.deselect_all();
                self.rebuild_flattened();
                false
            }
            TreeAction::Confirm | TreeAction::Copy | TreeAction::Quit => true,
        }
    }

    fn current(&self) -> Option<&FlattenedNode> {
        self.flattened.get(self.cursor)
    }

    // An open directory closes; anything else closes its parent and moves
    // the cursor onto it.
    fn collapse_current(&mut self) {
        let Some(row) = self.current() else {
            return;
        };
        if row.kind == RowKind::Dir && row.expanded {
            let path = row.path.clone();
            self.expanded.remove(&path);
            return;
        }

        let parent = row.parent.clone();
        if parent.is_empty() {
            return;
        }
        self.expanded.remove(&parent);
        if let Some(idx) = self
            .flattened
            .iter()
            .position(|r| r.kind == RowKind::Dir && r.path == parent)
        {
            self.cursor = idx;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.analysis.selection().selected_count()
    }

    pub fn total_count(&self) -> usize {
        self.analysis.selection().total_count()
    }

    /// Render the visible rows, one per line
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        for (i, node) in self.flattened.iter().enumerate() {
            out.push_str(&render_tree_node(node, i == self.cursor, supports_unicode));
            out.push('\n');
        }

        out
    }

    pub fn render_status_bar(&self, supports_unicode: bool) -> String {
        render_status_bar(self.selected_count(), self.total_count(), supports_unicode)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}

pub(super) fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

fn collect_dir_keys(
    node: &FileTreeNode,
    prefix: &str,
    depth: usize,
    max_depth: usize,
    out: &mut HashSet<String>,
) {
    if depth >= max_depth {
        return;
    }
    for dir in &node.dirs {
        let key = join_key(prefix, &dir.name);
        collect_dir_keys(dir, &key, depth + 1, max_depth, out);
        out.insert(key);
    }
}

fn flatten_dir(
    analysis: &RepositoryAnalysis,
    expanded: &HashSet<String>,
    node: &FileTreeNode,
    prefix: &str,
    depth: usize,
    out: &mut Vec<FlattenedNode>,
) {
    for dir in &node.dirs {
        let key = join_key(prefix, &dir.name);
        let is_expanded = expanded.contains(&key);
        out.push(FlattenedNode {
            kind: RowKind::Dir,
            path: key.clone(),
            parent: prefix.to_string(),
            depth,
            label: dir.name.clone(),
            state: analysis.directory_state(dir),
            expanded: is_expanded,
            has_children: !dir.is_empty(),
            file_count: dir.file_count(),
        });
        if is_expanded {
            flatten_dir(analysis, expanded, dir, &key, depth + 1, out);
        }
    }

    for file in &node.files {
        let state = if analysis.selection().is_selected(&file.path) {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        };
        out.push(FlattenedNode {
            kind: RowKind::File,
            path: file.path.clone(),
            parent: prefix.to_string(),
            depth,
            label: file.name.clone(),
            state,
            expanded: false,
            has_children: false,
            file_count: 1,
        });
    }
}
