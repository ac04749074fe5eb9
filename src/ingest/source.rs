//! Input resolution for the command line.
//!
//! An input names where an ingestion result comes from:
//!
//! - `-` reads a raw digest from stdin
//! - an existing directory is an ingestion output directory
//! - an existing `*.json` file holds a serialized `RepositoryIngestResult`
//! - any other existing file is a raw digest
//! - anything else is a repository reference (id, URL or path) looked up in
//!   the configured ingestion output directory

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::InsightResult;
use crate::models::RepositoryIngestResult;

use super::store::{repository_id, IngestStore};

/// Where an ingestion result is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestSource {
    Stdin,
    JsonFile(PathBuf),
    DigestFile(PathBuf),
    Store { dir: PathBuf, repo_id: Option<String> },
}

impl IngestSource {
    /// Classify a command line input
    pub fn resolve(input: &str, repo: Option<&str>, store_dir: &Path) -> Self {
        if input == "-" {
            return IngestSource::Stdin;
        }

        let path = Path::new(input);
        if path.is_dir() {
            return IngestSource::Store {
                dir: path.to_path_buf(),
                repo_id: repo.map(str::to_string),
            };
        }
        if path.is_file() {
            let is_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            return if is_json {
                IngestSource::JsonFile(path.to_path_buf())
            } else {
                IngestSource::DigestFile(path.to_path_buf())
            };
        }

        IngestSource::Store {
            dir: store_dir.to_path_buf(),
            repo_id: Some(repo.map_or_else(|| repository_id(input), str::to_string)),
        }
    }

    /// Read the ingestion result
    pub fn load(&self) -> InsightResult<RepositoryIngestResult> {
        match self {
            IngestSource::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(RepositoryIngestResult::from_content(content))
            }
            IngestSource::JsonFile(path) => {
                let raw = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            IngestSource::DigestFile(path) => {
                Ok(RepositoryIngestResult::from_content(fs::read_to_string(path)?))
            }
            IngestSource::Store { dir, repo_id } => {
                let store = IngestStore::new(dir);
                let id = match repo_id {
                    Some(id) => id.clone(),
                    None => store.latest()?,
                };
                store.load(&id)
            }
        }
    }
}

/// Resolve and read an input in one step
pub fn load_source(
    input: &str,
    repo: Option<&str>,
    store_dir: &Path,
) -> InsightResult<RepositoryIngestResult> {
    let source = IngestSource::resolve(input, repo, store_dir);
    tracing::debug!(?source, "resolved input");
    source.load()
}
