//! Configuration module for Opener
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (OPENER_*)
//! 3. `--config <path>`, or project config (./opener.toml)
//! 4. User config (<config dir>/opener/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{user_config_path, PROJECT_CONFIG_FILE};

pub use types::{CatalogConfig, ColorMode, CompareConfig, Config, OutputConfig, Verbosity};
