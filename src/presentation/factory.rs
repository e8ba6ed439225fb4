//! Comparator Factory
//!
//! Creates the comparator and catalog with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::ActionCatalog;
use crate::domain::services::OpenerComparator;
use crate::domain::value_objects::ActionId;
use crate::error::OpenerResult;
use crate::infrastructure::{ActionTable, UnnamedCatalog};

/// `--catalog` wins over `[catalog] path`.
pub fn catalog_path(cli: Option<&Path>, config: &Config) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| config.catalog.path.clone())
}

/// Load the action table at `path`.
pub fn load_action_table(path: &Path) -> OpenerResult<Arc<ActionTable>> {
    ActionTable::load(path).map(Arc::new)
}

/// Catalog for comparisons: the data sheet if one is configured, otherwise
/// ids compared as-is.
pub fn create_catalog(path: Option<&Path>) -> OpenerResult<Arc<dyn ActionCatalog>> {
    match path {
        Some(path) => Ok(load_action_table(path)?),
        None => {
            tracing::warn!("no action catalog configured; comparing raw action ids");
            Ok(Arc::new(UnnamedCatalog))
        }
    }
}

/// Create a comparator for `opener` using the configured groups and shift limit.
pub fn create_comparator(
    config: &Config,
    catalog: Arc<dyn ActionCatalog>,
    opener: Vec<ActionId>,
) -> OpenerComparator {
    OpenerComparator::new(catalog, Arc::new(config.group_table()))
        .with_max_shift(config.compare.max_shift)
        .with_loaded(opener)
}
