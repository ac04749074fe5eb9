//! Scenario: exploring a digest through `RepositoryAnalysis`
//!
//! Journey: load a digest, narrow the selection by directory and file,
//! export, then load a different digest and start over.
//!
//! Success Criteria:
//! - Directory state follows file selection (selected / partial / none)
//! - Export contains exactly the selected sections
//! - Reloading identical content keeps the selection; new content resets it

use codeinsight::{RepositoryAnalysis, RepositoryIngestResult, SelectionState};

use crate::common::*;

fn result(content: String) -> RepositoryIngestResult {
    RepositoryIngestResult {
        content,
        summary: SUMMARY.to_string(),
        file_tree: TREE_TEXT.to_string(),
    }
}

#[test]
fn scenario_analysis_complete_journey() {
    // Step 1: load
    let mut analysis = RepositoryAnalysis::from_result(result(project_digest()));
    assert_eq!(analysis.available_files().len(), 5);
    assert_eq!(analysis.selected_files().len(), 5);
    assert_eq!(analysis.filtered_content(), project_digest());

    // Step 2: drop src/utils as a whole
    assert!(analysis.toggle_directory("src/utils"));
    let src = analysis.file_tree().dir("src").expect("src").clone();
    assert_eq!(analysis.directory_state(&src), SelectionState::Partial);
    let utils = src.dir("utils").expect("utils");
    assert_eq!(analysis.directory_state(utils), SelectionState::Unselected);

    // Step 3: drop one more file, then export
    analysis.toggle_file_selection("docs/guide.md");
    let out = analysis.filtered_content();
    assert!(out.contains("File: README.md"));
    assert!(out.contains("File: src/App.tsx"));
    assert!(!out.contains("helpers.ts"));
    assert!(!out.contains("format.ts"));
    assert!(!out.contains("guide.md"));

    // Step 4: toggling a partial directory selects all of it
    assert!(analysis.toggle_directory("src"));
    assert_eq!(analysis.directory_state(&src), SelectionState::Selected);
    assert_eq!(analysis.selected_files().len(), 4);

    // Step 5: same content again keeps the selection
    assert!(!analysis.load(result(project_digest())));
    assert_eq!(analysis.selected_files().len(), 4);

    // Step 6: new content resets to all-selected
    assert!(analysis.load(result(two_file_digest())));
    assert_eq!(analysis.selected_files(), ["a.ts", "b.ts"]);
    assert_eq!(analysis.summary(), SUMMARY);
}

#[test]
fn scenario_select_none_exports_nothing() {
    let mut analysis = RepositoryAnalysis::from_result(result(project_digest()));

    analysis.deselect_all();

    assert_eq!(analysis.filtered_content(), "");
    analysis.toggle_select_all();
    assert_eq!(analysis.filtered_content(), project_digest());
}

#[test]
fn scenario_unloaded_analysis_is_empty() {
    let mut analysis = RepositoryAnalysis::new();

    assert!(analysis.has_no_files());
    assert_eq!(analysis.filtered_content(), "");
    assert!(!analysis.toggle_directory("src"));

    analysis.load(result(two_file_digest()));
    analysis.clear();
    assert!(analysis.has_no_files());
    assert_eq!(analysis.filtered_content(), "");
}
