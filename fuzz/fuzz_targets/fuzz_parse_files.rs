#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Detection and tree building must never panic
        let files = codeinsight::parse_files(content);
        let tree = codeinsight::build_tree(&files);
        assert_eq!(tree.file_count(), files.len());
    }
});
