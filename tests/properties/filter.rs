//! Property tests for selection-based digest reconstruction.

use std::collections::HashSet;

use proptest::prelude::*;

use codeinsight::{filtered_content, parse_files};

use super::strategies::{digest_for, digest_with_mask};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selecting the whole universe returns the digest byte for byte.
    #[test]
    fn property_full_selection_is_identity(raw in ".{0,400}") {
        let universe = parse_files(&raw);
        let selection: HashSet<String> = universe.iter().cloned().collect();

        prop_assert_eq!(filtered_content(&raw, &selection, &universe), raw);
    }

    /// PROPERTY: the filtered digest re-parses to exactly the selected files,
    /// in universe order.
    #[test]
    fn property_filtered_digest_reparses_to_selection(
        (paths, bodies, mask) in digest_with_mask(8)
    ) {
        let raw = digest_for(&paths, &bodies);
        let universe = parse_files(&raw);
        let selected: Vec<String> = paths
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(p, _)| p.clone())
            .collect();
        let selection: HashSet<String> = selected.iter().cloned().collect();

        let out = filtered_content(&raw, &selection, &universe);

        if selected.is_empty() {
            prop_assert_eq!(out, "");
        } else {
            prop_assert_eq!(parse_files(&out), selected);
        }
    }

    /// PROPERTY: every kept section keeps its body verbatim, dropped ones vanish.
    #[test]
    fn property_bodies_follow_their_sections(
        (paths, bodies, mask) in digest_with_mask(6)
    ) {
        let tagged: Vec<String> = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| format!("{b} #{i}#"))
            .collect();
        let raw = digest_for(&paths, &tagged);
        let universe = parse_files(&raw);
        let selection: HashSet<String> = paths
            .iter()
            .zip(&mask)
            .filter(|(_, keep)| **keep)
            .map(|(p, _)| p.clone())
            .collect();

        let out = filtered_content(&raw, &selection, &universe);

        for (i, keep) in mask.iter().enumerate() {
            let tag = format!("#{i}#");
            if selection.len() == universe.len() || *keep {
                prop_assert!(out.contains(&tagged[i]), "missing body {}", tag);
            } else {
                prop_assert!(!out.contains(&tag), "unexpected body {}", tag);
            }
        }
    }
}
