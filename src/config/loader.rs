//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InsightError, InsightResult};

use super::types::{ColorMode, Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".codeinsight.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Config plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Discovered files that failed to load, with the error
    pub skipped: Vec<(PathBuf, String)>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InsightResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InsightError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run.
///
/// An explicit path must load. Otherwise the project file, then the user
/// file, then defaults; a broken discovered file is skipped with a warning.
/// Environment overrides apply last.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> InsightResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            path: Some(path.to_path_buf()),
            warnings,
            skipped: Vec::new(),
        });
    }

    let mut skipped = Vec::new();
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];
    for path in candidates.into_iter().flatten() {
        if !path.is_file() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(LoadedConfig {
                    config: with_env_overrides(config),
                    path: Some(path),
                    warnings,
                    skipped,
                });
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable config");
                skipped.push((path, e.to_string()));
            }
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        path: None,
        warnings: Vec::new(),
        skipped,
    })
}

/// `<config dir>/codeinsight/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("codeinsight").join("config.toml"))
}

/// Apply environment variable overrides (CODEINSIGHT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // CODEINSIGHT_OUTPUT_DIR
    if let Some(dir) = get_env("CODEINSIGHT_OUTPUT_DIR") {
        if !dir.trim().is_empty() {
            config.ingest.output_dir = Some(PathBuf::from(dir));
        }
    }

    // CODEINSIGHT_VERBOSITY
    if let Some(verbosity) = get_env("CODEINSIGHT_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // CODEINSIGHT_COLOR
    if let Some(color) = get_env("CODEINSIGHT_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // CODEINSIGHT_UNICODE
    if let Some(val) = get_env("CODEINSIGHT_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "verbosity",
        "color",
        "unicode",
        "ingest",
        "output_dir",
        "tree",
        "expand_depth",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
