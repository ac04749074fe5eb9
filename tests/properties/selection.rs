//! Property tests for the selection store and tree grouping.

use proptest::prelude::*;

use codeinsight::{build_tree, SelectionState, SelectionStore};

use super::strategies::unique_paths;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: toggling the same file twice restores the selection.
    #[test]
    fn property_toggle_file_twice_is_identity(paths in unique_paths(8), pick in any::<prop::sample::Index>()) {
        let mut store = SelectionStore::new(paths.clone());
        let path = &paths[pick.index(paths.len())];
        store.deselect(&paths[0]);
        let before = store.selected_files();

        store.toggle_file(path);
        store.toggle_file(path);

        prop_assert_eq!(store.selected_files(), before);
    }

    /// PROPERTY: a directory toggle only touches that directory's files and
    /// leaves it fully selected or fully clear.
    #[test]
    fn property_directory_toggle_is_scoped(paths in unique_paths(10), clear_first in any::<bool>()) {
        let tree = build_tree(&paths);
        let mut store = SelectionStore::new(paths.clone());
        if clear_first {
            store.deselect_all();
        }

        for dir in &tree.dirs {
            let files = dir.all_files();
            let outside: Vec<String> = paths.iter().filter(|p| !files.contains(p)).cloned().collect();
            let outside_before: Vec<bool> = outside.iter().map(|p| store.is_selected(p)).collect();

            let fully = store.is_fully_selected(&files);
            store.toggle_directory(&files, fully);

            let expected = if fully { SelectionState::Unselected } else { SelectionState::Selected };
            prop_assert_eq!(store.selection_state(&files), expected);
            let outside_after: Vec<bool> = outside.iter().map(|p| store.is_selected(p)).collect();
            prop_assert_eq!(outside_after, outside_before);
        }
    }

    /// PROPERTY: the tree holds every path exactly once.
    #[test]
    fn property_tree_partitions_paths(paths in unique_paths(12)) {
        let tree = build_tree(&paths);

        let mut all = tree.all_files();
        let mut expected = paths.clone();
        all.sort();
        expected.sort();

        prop_assert_eq!(tree.file_count(), paths.len());
        prop_assert_eq!(all, expected);
    }

    /// PROPERTY: select-all toggling alternates between everything and nothing.
    #[test]
    fn property_toggle_select_all_alternates(paths in unique_paths(8)) {
        let mut store = SelectionStore::new(paths.clone());

        store.toggle_select_all();
        prop_assert_eq!(store.selected_count(), 0);

        store.toggle_select_all();
        prop_assert!(store.is_all_selected());
        prop_assert_eq!(store.selected_files(), paths);
    }
}
