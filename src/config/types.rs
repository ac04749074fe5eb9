//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::InsightResult;
use crate::ingest::IngestStore;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Ingestion artifacts configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IngestConfig {
    /// Directory holding `<id>_content.txt` and friends
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Interactive tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Directory depth expanded when the tree opens
    #[serde(default = "default_expand_depth")]
    pub expand_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            expand_depth: default_expand_depth(),
        }
    }
}

fn default_expand_depth() -> usize {
    1
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub tree: TreeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InsightResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InsightResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (CODEINSIGHT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured ingestion output directory, or the default one
    pub fn ingest_dir(&self) -> PathBuf {
        self.ingest
            .output_dir
            .clone()
            .unwrap_or_else(IngestStore::default_dir)
    }
}
