//! Configuration module for CodeInsight
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CODEINSIGHT_*)
//! 3. `--config <path>`, else `./.codeinsight.toml`, else
//!    `<config dir>/codeinsight/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! Config is loaded once at startup and handed to commands explicitly.

mod loader;
mod types;

pub use loader::{
    discover, user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, IngestConfig, OutputConfig, TreeConfig, Verbosity};
