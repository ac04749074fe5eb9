//! Property tests for file path detection.

use proptest::prelude::*;

use codeinsight::content::{detect_files, ParseStrategy};
use codeinsight::parse_files;

use super::strategies::{digest_for, unique_paths};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics and never yields empty or duplicate paths.
    #[test]
    fn property_parse_files_is_total_and_deduplicated(input in ".{0,400}") {
        let files = parse_files(&input);

        let mut seen = std::collections::HashSet::new();
        for f in &files {
            prop_assert!(!f.is_empty());
            prop_assert_eq!(f.trim(), f.as_str());
            prop_assert!(seen.insert(f.clone()), "duplicate path {}", f);
        }
    }

    /// PROPERTY: a strict-format digest yields exactly its paths, in order.
    #[test]
    fn property_strict_digest_round_trips_paths(paths in unique_paths(8)) {
        let digest = digest_for(&paths, &["body".to_string()]);

        let parsed = detect_files(&digest);

        prop_assert_eq!(parsed.strategy, ParseStrategy::Delimited);
        prop_assert_eq!(parsed.files, paths);
    }

    /// PROPERTY: bare header lines are found by the line scan fallback.
    #[test]
    fn property_line_scan_finds_bare_headers(paths in unique_paths(8)) {
        let digest: String = paths
            .iter()
            .map(|p| format!("File: {p}\ncontent\n"))
            .collect();

        let parsed = detect_files(&digest);

        prop_assert_eq!(parsed.strategy, ParseStrategy::LineScan);
        prop_assert_eq!(parsed.files, paths);
    }

    /// PROPERTY: repeating a section never repeats its path.
    #[test]
    fn property_repeated_sections_keep_first_appearance(paths in unique_paths(6)) {
        let mut doubled = paths.clone();
        doubled.extend(paths.iter().rev().cloned());
        let digest = digest_for(&doubled, &["x".to_string()]);

        prop_assert_eq!(parse_files(&digest), paths);
    }
}
