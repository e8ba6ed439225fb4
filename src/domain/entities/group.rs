//! GroupOfActions entity - one opener slot satisfiable by several actions

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RawActionId;

/// A named set of interchangeable actions.
///
/// Membership is flat: any listed action satisfies the slot. No ordering or
/// transitivity between members is implied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOfActions {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub actions: Vec<RawActionId>,
}

impl GroupOfActions {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        actions: Vec<RawActionId>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            actions,
        }
    }

    pub fn contains(&self, action: RawActionId) -> bool {
        self.actions.contains(&action)
    }

    /// Dancer step actions (Emboite, Entrechat, Jete, Pirouette).
    pub fn dancer_steps() -> Self {
        Self::new(
            "Dancer Steps",
            "Any step performed during Standard or Technical Step",
            vec![15999, 16000, 16001, 16002],
        )
    }
}
