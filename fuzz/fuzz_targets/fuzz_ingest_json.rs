#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(result) = serde_json::from_slice::<codeinsight::RepositoryIngestResult>(data) {
        let analysis = codeinsight::RepositoryAnalysis::from_result(result);
        let _ = analysis.filtered_content();
    }
    let _ = serde_json::from_slice::<codeinsight::IngestMetadata>(data);
});
