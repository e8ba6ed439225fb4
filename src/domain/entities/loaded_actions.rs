//! LoadedActions entity - the opener being edited
//!
//! Holds the reference opener together with the positions that the last
//! comparison flagged as wrong, so an editor can highlight them.

use std::collections::BTreeSet;

use crate::domain::value_objects::ActionId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedActions {
    actions: Vec<ActionId>,
    wrong: BTreeSet<usize>,
}

impl LoadedActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: Vec<ActionId>) -> Self {
        Self {
            actions,
            wrong: BTreeSet::new(),
        }
    }

    pub fn actions_count(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn action_at(&self, i: usize) -> Option<ActionId> {
        self.actions.get(i).copied()
    }

    pub fn actions(&self) -> &[ActionId] {
        &self.actions
    }

    pub fn add_action(&mut self, action: ActionId) {
        self.actions.push(action);
    }

    /// Insert before position `i`; past-the-end positions append.
    pub fn insert_action_at(&mut self, i: usize, action: ActionId) {
        let at = i.min(self.actions.len());
        self.actions.insert(at, action);
    }

    pub fn remove_action_at(&mut self, i: usize) -> Option<ActionId> {
        if i < self.actions.len() {
            Some(self.actions.remove(i))
        } else {
            None
        }
    }

    /// Drop every action and every wrong-position flag.
    pub fn clear_actions(&mut self) {
        self.actions.clear();
        self.wrong.clear();
    }

    /// Replace the whole opener; flags from a previous comparison no longer apply.
    pub fn replace_actions(&mut self, actions: Vec<ActionId>) {
        self.actions = actions;
        self.wrong.clear();
    }

    pub fn add_wrong_action_at(&mut self, i: usize) {
        self.wrong.insert(i);
    }

    pub fn is_wrong_action_at(&self, i: usize) -> bool {
        self.wrong.contains(&i)
    }

    pub fn clear_wrong_actions(&mut self) {
        self.wrong.clear();
    }

    /// Flagged positions in ascending order.
    pub fn wrong_actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.wrong.iter().copied()
    }
}
