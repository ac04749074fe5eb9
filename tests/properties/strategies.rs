//! Shared generators for digest-shaped input.

use proptest::prelude::*;

/// Relative path with 1-3 lowercase segments and an extension
pub fn file_path() -> impl Strategy<Value = String> {
    let dir = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    let file = proptest::string::string_regex("[a-z]{1,8}\\.(rs|ts|md)").unwrap();
    (proptest::collection::vec(dir, 0..=2), file).prop_map(|(mut dirs, file)| {
        dirs.push(file);
        dirs.join("/")
    })
}

/// Distinct paths in a stable order
pub fn unique_paths(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(file_path(), 1..=max).prop_map(|set| set.into_iter().collect())
}

/// One non-blank body line that can never look like a header or delimiter
pub fn body_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,10}( [a-z{}();]{1,10}){0,3}").unwrap()
}

/// A strict-format digest over `paths`
pub fn digest_for(paths: &[String], bodies: &[String]) -> String {
    let rule = "=".repeat(50);
    paths
        .iter()
        .zip(bodies.iter().cycle())
        .map(|(path, body)| format!("{rule}\n\nFile: {path}\n\n{rule}\n{body}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Paths, bodies for them and a selection mask of the same length
pub fn digest_with_mask(max: usize) -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<bool>)> {
    unique_paths(max).prop_flat_map(|paths| {
        let n = paths.len();
        (
            Just(paths),
            proptest::collection::vec(body_line(), n),
            proptest::collection::vec(any::<bool>(), n),
        )
    })
}
