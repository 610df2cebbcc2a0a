//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TreeSelectError, TreeSelectResult};

use super::types::{ColorMode, Config};

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "treeselect.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Resolved configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeSelectError::InvalidConfig {
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the effective configuration.
///
/// An explicit path must exist. Otherwise `./treeselect.toml` in `cwd` wins
/// over the user config, and built-in defaults apply when neither exists.
/// Environment overrides are applied last. A relative `tree.path` is resolved
/// against the directory of the file that set it.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> TreeSelectResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            let user = dirs::config_dir().map(|dir| dir.join("treeselect/config.toml"));
            std::iter::once(project)
                .chain(user)
                .find(|path| path.is_file())
        }
    };

    let loaded = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (mut config, warnings) = load_with_warnings(&path)?;
            if let (Some(tree), Some(dir)) = (config.tree.path.as_mut(), path.parent()) {
                if tree.is_relative() {
                    *tree = dir.join(&*tree);
                }
            }
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            debug!("no config file found, using defaults");
            LoadedConfig::default()
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config, |key| std::env::var(key).ok()),
        ..loaded
    })
}

/// Apply environment variable overrides (TREESELECT_* prefix)
///
/// `get_env` is injected so tests do not touch the process environment.
pub fn with_env_overrides<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // TREESELECT_TREE
    if let Some(path) = get_env("TREESELECT_TREE").filter(|p| !p.is_empty()) {
        config.tree.path = Some(PathBuf::from(path));
    }

    // TREESELECT_COLOR
    if let Some(mode) = get_env("TREESELECT_COLOR") {
        config.output.color = match mode.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // TREESELECT_UNICODE
    if let Some(val) = get_env("TREESELECT_UNICODE") {
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

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "ui",
        "title",
        "placeholder",
        "search_placeholder",
        "empty_message",
        "output",
        "color",
        "unicode",
        "tree",
        "path",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b.len()]
}
