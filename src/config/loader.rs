//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DrillError, DrillResult};

use super::types::Config;

/// Path of a config file to use instead of the default location
pub const ENV_CONFIG: &str = "DRILLS_CONFIG";
/// `strict` or `lenient`
pub const ENV_INPUT_MODE: &str = "DRILLS_INPUT_MODE";
/// `text` or `json`
pub const ENV_OUTPUT_FORMAT: &str = "DRILLS_OUTPUT_FORMAT";
/// Default log level, e.g. `debug`
pub const ENV_LOG: &str = "DRILLS_LOG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DrillResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DrillError::ConfigParse {
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

/// `<config_dir>/drills/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("drills").join("config.toml"))
}

/// Resolve and load configuration, then apply environment overrides.
///
/// An `explicit` path must exist. A path from `DRILLS_CONFIG` or the default
/// location is used only when present; otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> DrillResult<LoadedConfig> {
    load_from(explicit, |key| std::env::var(key).ok(), default_config_path())
}

pub(crate) fn load_from(
    explicit: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    default_path: Option<PathBuf>,
) -> DrillResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) if !path.exists() => {
            return Err(DrillError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => env(ENV_CONFIG).map(PathBuf::from).or(default_path),
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = candidate.filter(|p| p.is_file()) {
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.source = Some(path);
    }

    loaded.config = apply_env_overrides(loaded.config, env);
    Ok(loaded)
}

/// Apply environment variable overrides (DRILLS_* prefix).
///
/// Unrecognized values leave the setting unchanged.
pub fn apply_env_overrides(mut config: Config, env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(mode) = env(ENV_INPUT_MODE).and_then(|v| v.parse().ok()) {
        config.input.mode = mode;
    }

    if let Some(format) = env(ENV_OUTPUT_FORMAT).and_then(|v| v.parse().ok()) {
        config.output.format = format;
    }

    if let Some(level) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
        config.logging.default = level.trim().to_lowercase();
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
        "input", "mode", "output", "format", "logging", "default", "modules",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
