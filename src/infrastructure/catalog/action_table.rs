//! TOML Action Table
//!
//! Table-backed [`ActionCatalog`] loaded from an action data sheet:
//!
//! ```toml
//! [[actions]]
//! id = 16007
//! name = "Fan Dance"
//! job = "DNC"
//!
//! [[actions]]
//! id = 3640
//! name = "Retired Skill"
//! obsolete = true
//! ```
//!
//! Obsolete rows and ids missing from the sheet resolve to the old-action label.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{ActionCatalog, CATCH_ALL_ACTION_NAME, OLD_ACTION_NAME};
use crate::domain::value_objects::{Job, RawActionId};
use crate::error::{OpenerError, OpenerResult};

/// One row of the action data sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: RawActionId,
    pub name: String,
    /// Job category text, e.g. "DNC" or "BRD MCH DNC".
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
}

#[derive(Debug, Deserialize)]
struct TomlActionSheet {
    #[serde(default)]
    actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    records: Vec<ActionRecord>,
    by_id: HashMap<RawActionId, usize>,
}

impl ActionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table; `source` names the sheet in errors.
    ///
    /// Every name must contain visible text: an empty name is a substring of
    /// every other name and would match any recorded action.
    pub fn from_records(records: Vec<ActionRecord>, source: &Path) -> OpenerResult<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(OpenerError::InvalidCatalog {
                    file: source.to_path_buf(),
                    message: format!("action {} has a blank name", record.id),
                });
            }
            if by_id.insert(record.id, i).is_some() {
                return Err(OpenerError::DuplicateAction {
                    id: record.id,
                    file: source.to_path_buf(),
                });
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn from_toml_str(content: &str, source: &Path) -> OpenerResult<Self> {
        let sheet: TomlActionSheet =
            toml::from_str(content).map_err(|e| OpenerError::InvalidCatalog {
                file: source.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_records(sheet.actions, source)
    }

    pub fn load(path: &Path) -> OpenerResult<Self> {
        if !path.exists() {
            return Err(OpenerError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content, path)?;
        tracing::info!(path = %path.display(), actions = table.len(), "loaded action catalog");
        Ok(table)
    }

    pub fn get(&self, id: RawActionId) -> Option<&ActionRecord> {
        self.by_id.get(&id).map(|i| &self.records[*i])
    }

    fn usable(&self, id: RawActionId) -> Option<&ActionRecord> {
        self.get(id).filter(|r| r.id != 0 && !r.obsolete)
    }

    /// Every usable action id, in sheet order.
    pub fn ids(&self) -> Vec<RawActionId> {
        self.records
            .iter()
            .filter(|r| r.id != 0 && !r.obsolete)
            .map(|r| r.id)
            .collect()
    }

    /// Usable actions whose name contains `name` (case-insensitive), filtered by job.
    ///
    /// Sorted by id, no duplicates.
    pub fn search(&self, name: &str, job: &Job) -> Vec<RawActionId> {
        let needle = name.to_lowercase();
        let mut ids: Vec<RawActionId> = self
            .records
            .iter()
            .filter(|r| r.id != 0 && !r.obsolete)
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .filter(|r| job.allows(r.job.as_deref()))
            .map(|r| r.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ActionCatalog for ActionTable {
    fn action_name(&self, id: RawActionId) -> String {
        if id == 0 {
            return CATCH_ALL_ACTION_NAME.to_string();
        }
        self.usable(id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| OLD_ACTION_NAME.to_string())
    }
}
