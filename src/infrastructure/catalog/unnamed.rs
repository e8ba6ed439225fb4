//! Catalog used when no action data sheet is configured.
//!
//! Names are derived from ids and actions are only the same when their ids are.

use crate::domain::ports::{ActionCatalog, CATCH_ALL_ACTION_NAME};
use crate::domain::value_objects::RawActionId;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnnamedCatalog;

impl ActionCatalog for UnnamedCatalog {
    fn action_name(&self, id: RawActionId) -> String {
        if id == 0 {
            CATCH_ALL_ACTION_NAME.to_string()
        } else {
            format!("Action #{}", id)
        }
    }

    /// Whole-name comparison, not the substring test of the port default.
    ///
    /// Derived names share prefixes ("Action #1" is contained in
    /// "Action #15999"), so containment would match unrelated ids.
    fn same_actions_by_name(&self, name: &str, id: RawActionId) -> bool {
        self.action_name(id).eq_ignore_ascii_case(name)
    }

    fn is_old_action(&self, _id: RawActionId) -> bool {
        false
    }
}
