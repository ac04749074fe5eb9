#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&mask, rest)) = data.split_first() else {
        return;
    };
    if let Ok(content) = std::str::from_utf8(rest) {
        let universe = codeinsight::parse_files(content);
        let selection: HashSet<String> = universe
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << (i % 8)) != 0)
            .map(|(_, p)| p.clone())
            .collect();

        let out = codeinsight::filtered_content(content, &selection, &universe);
        if selection.len() == universe.len() {
            assert_eq!(out, content);
        }
    }
});
