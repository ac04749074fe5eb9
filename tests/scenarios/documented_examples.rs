//! Scenario: the reference digest examples
//!
//! Two-file digest `a.ts` / `b.ts`, a nested path list and a digest with no
//! headers, each taken through parse, tree and filter.

use std::collections::HashSet;

use codeinsight::{build_tree, filtered_content, parse_files, FileLeaf};

use crate::common::*;

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn scenario_two_file_digest_parses_in_order() {
    let raw = two_file_digest();

    assert_eq!(parse_files(&raw), ["a.ts", "b.ts"]);
}

#[test]
fn scenario_flat_paths_build_root_files_only() {
    let tree = build_tree(&parse_files(&two_file_digest()));

    assert_eq!(
        tree.files,
        vec![
            FileLeaf {
                name: "a.ts".into(),
                path: "a.ts".into()
            },
            FileLeaf {
                name: "b.ts".into(),
                path: "b.ts".into()
            },
        ]
    );
    assert!(tree.dirs.is_empty());
}

#[test]
fn scenario_filter_keeps_only_the_selected_section() {
    let raw = two_file_digest();
    let universe = parse_files(&raw);

    let out = filtered_content(&raw, &set(&["b.ts"]), &universe);

    let rule = rule();
    assert_eq!(out, format!("{rule}\n\nFile: b.ts\n\n{rule}\nbody-b"));
    assert!(!out.contains("a.ts"));
    assert!(!out.contains("body-a"));
}

#[test]
fn scenario_nested_paths_build_directories() {
    let tree = build_tree(&["src/App.tsx".to_string(), "src/utils/helpers.ts".to_string()]);

    let src = tree.dir("src").expect("src directory");
    assert_eq!(src.files.len(), 1);
    assert_eq!(src.files[0].name, "App.tsx");
    assert_eq!(src.files[0].path, "src/App.tsx");

    let utils = src.dir("utils").expect("utils directory");
    assert_eq!(utils.files[0].name, "helpers.ts");
    assert_eq!(utils.files[0].path, "src/utils/helpers.ts");
    assert!(tree.files.is_empty());
}

#[test]
fn scenario_digest_without_headers() {
    let raw = "just some text\nwith no sections\n";
    let universe = parse_files(raw);

    assert!(universe.is_empty());
    assert_eq!(filtered_content(raw, &HashSet::new(), &["x.ts".to_string()]), "");
    // A selection naming files the empty universe lacks keeps nothing
    assert_eq!(filtered_content(raw, &set(&["x.ts"]), &universe), "");
    // Empty selection over an empty universe is the full selection
    assert_eq!(filtered_content(raw, &HashSet::new(), &universe), raw);
}

#[test]
fn scenario_narrow_delimiters_fall_back_to_line_scan() {
    let raw = narrow_digest();
    let universe = parse_files(&raw);
    assert_eq!(universe, ["main.py", "lib/util.py"]);

    let out = filtered_content(&raw, &set(&["lib/util.py"]), &universe);

    assert!(out.starts_with(&"=".repeat(48)));
    assert!(out.contains("File: lib/util.py"));
    assert!(out.contains("def util():"));
    assert!(!out.contains("print('hi')"));
}
