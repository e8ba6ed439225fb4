//! GroupRegistry port
//!
//! Looks up the group referenced by a group marker (`-n` is index `n`).

use crate::domain::entities::GroupOfActions;

pub trait GroupRegistry: Send + Sync {
    /// Group with the given 1-based index.
    fn group(&self, index: u32) -> Option<&GroupOfActions>;
}
