//! Data models exchanged with the ingestion service
//!
//! - `RepositoryIngestResult`: the digest plus its opaque summary and tree text
//! - `IngestMetadata`: the `<id>_metadata.json` record written next to the
//!   ingestion artifacts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output of one repository ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryIngestResult {
    /// The delimited digest of every ingested file
    #[serde(default)]
    pub content: String,

    /// Human readable summary (passed through untouched)
    #[serde(default)]
    pub summary: String,

    /// Pre-rendered directory tree text (passed through untouched)
    #[serde(default)]
    pub file_tree: String,
}

impl RepositoryIngestResult {
    /// Result holding only a digest
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Artifact paths recorded in the metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestFiles {
    #[serde(default)]
    pub summary: Option<PathBuf>,
    #[serde(default)]
    pub tree: Option<PathBuf>,
    #[serde(default)]
    pub content: Option<PathBuf>,
}

/// Artifact sizes recorded in the metadata file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    #[serde(default)]
    pub summary_length: usize,
    #[serde(default)]
    pub tree_length: usize,
    #[serde(default)]
    pub content_length: usize,
}

/// Contents of `<id>_metadata.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestMetadata {
    pub repository_id: String,

    /// Local timestamp, `YYYY-MM-DD HH:MM:SS[.ffffff]`
    #[serde(default)]
    pub processed_at: Option<String>,

    #[serde(default)]
    pub files: IngestFiles,

    #[serde(default)]
    pub stats: IngestStats,
}

impl IngestMetadata {
    /// Parse `processed_at` into a timestamp
    pub fn processed_at(&self) -> Option<chrono::NaiveDateTime> {
        let raw = self.processed_at.as_deref()?.trim();
        ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}
