//! Group table
//!
//! [`GroupRegistry`] over an ordered list of groups: the first group is
//! marker `-1`, the second `-2`, and so on.

use crate::domain::entities::GroupOfActions;
use crate::domain::ports::GroupRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    groups: Vec<GroupOfActions>,
}

impl GroupTable {
    pub fn new(groups: Vec<GroupOfActions>) -> Self {
        Self { groups }
    }

    /// Groups shipped with the tool.
    pub fn builtin() -> Self {
        Self::new(vec![GroupOfActions::dancer_steps()])
    }

    /// Configured groups, or the built-in ones when none are configured.
    pub fn from_config(groups: &[GroupOfActions]) -> Self {
        if groups.is_empty() {
            Self::builtin()
        } else {
            Self::new(groups.to_vec())
        }
    }

    /// `(index, group)` pairs, 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &GroupOfActions)> {
        (1u32..).zip(self.groups.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl GroupRegistry for GroupTable {
    fn group(&self, index: u32) -> Option<&GroupOfActions> {
        let i = usize::try_from(index).ok()?.checked_sub(1)?;
        self.groups.get(i)
    }
}
