//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OpenerError, OpenerResult};

use super::types::{ColorMode, Config, Verbosity};

pub use crate::domain::value_objects::ConfigWarning;

/// File name looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "opener.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OpenerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OpenerError::InvalidConfig {
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

/// Explicit path, then project config, then user config, then defaults.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: &Path,
) -> OpenerResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(project_root),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok((config.with_env_overrides(), warnings))
}

fn discover(project_root: &Path) -> Option<PathBuf> {
    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    user_config_path().filter(|p| p.is_file())
}

/// `<config dir>/opener/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("opener").join("config.toml"))
}

/// Apply environment variable overrides (OPENER_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // OPENER_MAX_SHIFT
    if let Some(value) = get_env("OPENER_MAX_SHIFT") {
        match value.trim().parse::<usize>() {
            Ok(n) => config.compare.max_shift = n,
            Err(_) => tracing::warn!(value = %value, "ignoring non-numeric OPENER_MAX_SHIFT"),
        }
    }

    // OPENER_CATALOG
    if let Some(path) = get_env("OPENER_CATALOG") {
        if !path.trim().is_empty() {
            config.catalog.path = Some(PathBuf::from(path));
        }
    }

    // OPENER_VERBOSITY
    if let Some(verbosity) = get_env("OPENER_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // OPENER_COLOR
    if let Some(color) = get_env("OPENER_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compare",
        "max_shift",
        "catalog",
        "path",
        "groups",
        "name",
        "description",
        "actions",
        "output",
        "verbosity",
        "color",
        "unicode",
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
