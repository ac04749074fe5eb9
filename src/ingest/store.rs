//! Ingestion output directory.
//!
//! The ingestion step writes four artifacts per repository id:
//! `<id>_summary.txt`, `<id>_tree.txt`, `<id>_content.txt` and
//! `<id>_metadata.json`. The content file is what makes an id present.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{InsightError, InsightResult};
use crate::models::{IngestMetadata, RepositoryIngestResult};

const CONTENT_SUFFIX: &str = "_content.txt";
const SUMMARY_SUFFIX: &str = "_summary.txt";
const TREE_SUFFIX: &str = "_tree.txt";
const METADATA_SUFFIX: &str = "_metadata.json";

/// One repository found in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRepository {
    pub id: String,
    pub content_path: PathBuf,
    pub metadata: Option<IngestMetadata>,
}

/// Read access to an ingestion output directory
#[derive(Debug, Clone)]
pub struct IngestStore {
    dir: PathBuf,
}

impl IngestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<system temp>/codeinsight`
    pub fn default_dir() -> PathBuf {
        std::env::temp_dir().join("codeinsight")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn content_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{CONTENT_SUFFIX}"))
    }

    pub fn summary_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{SUMMARY_SUFFIX}"))
    }

    pub fn tree_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{TREE_SUFFIX}"))
    }

    pub fn metadata_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}{METADATA_SUFFIX}"))
    }

    /// Ids with a content artifact, sorted. A missing directory is empty.
    pub fn repository_ids(&self) -> InsightResult<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = name.strip_suffix(CONTENT_SUFFIX) {
                if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// All repositories with their metadata, sorted by id
    pub fn list(&self) -> InsightResult<Vec<StoredRepository>> {
        self.repository_ids()?
            .into_iter()
            .map(|id| -> InsightResult<StoredRepository> {
                Ok(StoredRepository {
                    content_path: self.content_path(&id),
                    metadata: self.metadata(&id)?,
                    id,
                })
            })
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.content_path(id).is_file()
    }

    /// Parsed metadata for `id`; unreadable metadata is skipped with a warning
    pub fn metadata(&self, id: &str) -> InsightResult<Option<IngestMetadata>> {
        let path = self.metadata_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str::<IngestMetadata>(&raw) {
            Ok(meta) => Ok(Some(meta)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable metadata");
                Ok(None)
            }
        }
    }

    /// Most recently processed repository id.
    ///
    /// Uses metadata `processed_at`, else the content file's mtime.
    pub fn latest(&self) -> InsightResult<String> {
        let repos = self.list()?;
        let mut best: Option<(SystemTime, String)> = None;

        for repo in repos {
            let stamp = repo
                .metadata
                .as_ref()
                .and_then(|m| m.processed_at())
                .and_then(naive_to_system_time)
                .or_else(|| fs::metadata(&repo.content_path).and_then(|m| m.modified()).ok())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            let newer = best.as_ref().map_or(true, |(t, _)| stamp >= *t);
            if newer {
                best = Some((stamp, repo.id));
            }
        }

        best.map(|(_, id)| id).ok_or_else(|| InsightError::EmptyStore {
            dir: self.dir.clone(),
        })
    }

    /// Load the ingestion result for `id`.
    ///
    /// Content is required; summary and tree default to empty text.
    pub fn load(&self, id: &str) -> InsightResult<RepositoryIngestResult> {
        let content_path = self.content_path(id);
        if !content_path.is_file() {
            return Err(InsightError::UnknownRepository {
                repo_id: id.to_string(),
                dir: self.dir.clone(),
            });
        }

        tracing::debug!(id, dir = %self.dir.display(), "loading ingested repository");
        Ok(RepositoryIngestResult {
            content: fs::read_to_string(&content_path)?,
            summary: read_optional(&self.summary_path(id))?,
            file_tree: read_optional(&self.tree_path(id))?,
        })
    }
}

fn read_optional(path: &Path) -> InsightResult<String> {
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(String::new())
    }
}

fn naive_to_system_time(ts: chrono::NaiveDateTime) -> Option<SystemTime> {
    let utc = ts.and_utc();
    let secs = u64::try_from(utc.timestamp()).ok()?;
    Some(
        SystemTime::UNIX_EPOCH
            + std::time::Duration::from_secs(secs)
            + std::time::Duration::from_nanos(u64::from(utc.timestamp_subsec_nanos())),
    )
}

/// Repository id the ingestion step derives from a path or URL.
///
/// URLs and paths use their last segment; a trailing `.git` is dropped.
pub fn repository_id(reference: &str) -> String {
    let trimmed = reference.trim().trim_end_matches(['/', '\\']);
    let last = trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}
