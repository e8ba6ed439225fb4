//! ActionCatalog port - the action identity provider
//!
//! Resolves action ids to display names and decides whether two ids name
//! the same logical action. Implementations are read-only after construction
//! and may be shared across threads.

use crate::domain::value_objects::RawActionId;

/// Label returned for the catch-all id `0`.
pub const CATCH_ALL_ACTION_NAME: &str = "Catch All";

/// Label returned for ids that no longer resolve to usable game data.
pub const OLD_ACTION_NAME: &str = "Old Action";

pub trait ActionCatalog: Send + Sync {
    /// Display name of `id`.
    ///
    /// `0` resolves to [`CATCH_ALL_ACTION_NAME`]; unknown or obsolete ids
    /// resolve to [`OLD_ACTION_NAME`].
    fn action_name(&self, id: RawActionId) -> String;

    /// Case-insensitive: does the name of `id` contain `name`?
    fn same_actions_by_name(&self, name: &str, id: RawActionId) -> bool {
        self.action_name(id)
            .to_lowercase()
            .contains(&name.to_lowercase())
    }

    fn is_old_action(&self, id: RawActionId) -> bool {
        id != 0 && self.action_name(id) == OLD_ACTION_NAME
    }
}
