//! Selection state for detected files.
//!
//! The store owns the file universe (every detected path) and the subset
//! currently chosen for display and export. Paths outside the universe are
//! ignored silently: callers only ever pass paths taken from the universe.

use std::collections::HashSet;

/// Tri-state of a group of files (a directory checkbox)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// All items selected (●)
    Selected,
    /// No items selected (○)
    Unselected,
    /// Some but not all items selected (◐)
    Partial,
}

/// The set of currently selected files plus the universe they come from
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    universe: Vec<String>,
    known: HashSet<String>,
    selected: HashSet<String>,
}

impl SelectionStore {
    /// Create a store over `universe` with every file selected
    pub fn new(universe: Vec<String>) -> Self {
        let known: HashSet<String> = universe.iter().cloned().collect();
        Self {
            selected: known.clone(),
            known,
            universe,
        }
    }

    /// Replace the universe and reset to all selected
    pub fn replace_universe(&mut self, universe: Vec<String>) {
        *self = Self::new(universe);
    }

    /// All detected files, in detection order
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// The selected set
    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Selected files in universe order
    pub fn selected_files(&self) -> Vec<String> {
        self.universe
            .iter()
            .filter(|p| self.selected.contains(*p))
            .cloned()
            .collect()
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.contains(path)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn total_count(&self) -> usize {
        self.universe.len()
    }

    /// Selection size equals universe size
    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.universe.len()
    }

    pub fn select_all(&mut self) {
        self.selected = self.known.clone();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Deselect everything when all files are selected, otherwise select all
    pub fn toggle_select_all(&mut self) {
        if self.is_all_selected() {
            self.deselect_all();
        } else {
            self.select_all();
        }
    }

    /// Flip membership of one file
    pub fn toggle_file(&mut self, path: &str) {
        if !self.known.contains(path) {
            return;
        }
        if !self.selected.remove(path) {
            self.selected.insert(path.to_string());
        }
    }

    /// Select one file (no-op when already selected or unknown)
    pub fn select(&mut self, path: &str) {
        if self.known.contains(path) && !self.selected.contains(path) {
            self.selected.insert(path.to_string());
        }
    }

    /// Deselect one file
    pub fn deselect(&mut self, path: &str) {
        self.selected.remove(path);
    }

    /// Bulk toggle for a directory subtree.
    ///
    /// When `currently_fully_selected` every file in `dir_files` is removed,
    /// otherwise the missing ones are added.
    pub fn toggle_directory(&mut self, dir_files: &[String], currently_fully_selected: bool) {
        if currently_fully_selected {
            for path in dir_files {
                self.selected.remove(path);
            }
        } else {
            for path in dir_files {
                self.select(path);
            }
        }
    }

    /// Every file in `files` is selected (false for an empty group)
    pub fn is_fully_selected(&self, files: &[String]) -> bool {
        !files.is_empty() && files.iter().all(|p| self.selected.contains(p))
    }

    /// Tri-state of a group of files
    pub fn selection_state(&self, files: &[String]) -> SelectionState {
        let selected = files.iter().filter(|p| self.selected.contains(*p)).count();
        if selected == 0 {
            SelectionState::Unselected
        } else if selected == files.len() {
            SelectionState::Selected
        } else {
            SelectionState::Partial
        }
    }
}
