//! CodeInsight - repository digest explorer
//!
//! A repository ingestion step turns a repository into one delimited text
//! digest. CodeInsight detects the files in that digest, arranges them into a
//! directory tree, tracks which of them are selected, and rebuilds the digest
//! for just the selection.

pub mod analysis;
pub mod config;
pub mod content;
pub mod error;
pub mod ingest;
pub mod models;

// Re-exports for convenience
pub use analysis::RepositoryAnalysis;
pub use config::Config;
pub use content::{
    build_tree, filtered_content, parse_files, FileLeaf, FileTreeNode, SelectionState,
    SelectionStore,
};
pub use error::{InsightError, InsightResult};
pub use ingest::{load_source, IngestStore};
pub use models::{IngestMetadata, RepositoryIngestResult};
