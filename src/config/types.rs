//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::GroupOfActions;
use crate::domain::services::DEFAULT_MAX_SHIFT;
use crate::error::OpenerResult;
use crate::infrastructure::GroupTable;

use super::loader::{self, ConfigWarning};

/// Comparison configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Largest offset tried when looking for a shifted opener (0 disables)
    #[serde(default = "default_max_shift")]
    pub max_shift: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_shift: default_max_shift(),
        }
    }
}

fn default_max_shift() -> usize {
    DEFAULT_MAX_SHIFT
}

/// Action data sheet location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Action groups; `-1` refers to the first entry.
    #[serde(default)]
    pub groups: Vec<GroupOfActions>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OpenerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> OpenerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load. Otherwise `opener.toml` in `project_root`,
    /// then the user config, then defaults. Environment overrides apply last.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> OpenerResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (OPENER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Group registry for the configured (or built-in) groups.
    pub fn group_table(&self) -> GroupTable {
        GroupTable::from_config(&self.groups)
    }
}
