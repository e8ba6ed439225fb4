//! Opener comparison
//!
//! Walks the reference opener and a recorded sequence side by side and
//! reports every position where they disagree, plus at most one shift or
//! length drift, into a [`Feedback`] log.

use std::sync::Arc;

use crate::domain::entities::{Feedback, MessageType};
use crate::domain::ports::{ActionCatalog, GroupRegistry};
use crate::domain::services::alignment::{detect_shift, Shift};
use crate::domain::value_objects::{ActionId, RawActionId};

/// Largest offset tried when looking for a shift.
pub const DEFAULT_MAX_SHIFT: usize = 3;

/// Message recorded when nothing went wrong.
pub const SUCCESS_MESSAGE: &str = "Great job! Opener executed perfectly.";

/// Outcome of [`OpenerComparator::compare_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub feedback: Feedback,
    /// 0-indexed opener positions that did not match, in report order.
    pub wrong_actions: Vec<usize>,
}

impl ComparisonReport {
    pub fn error_count(&self) -> usize {
        self.wrong_actions.len()
    }

    pub fn is_perfect(&self) -> bool {
        self.wrong_actions.is_empty() && self.feedback.count(MessageType::Success) > 0
    }
}

/// Compares recorded actions against a loaded opener.
pub struct OpenerComparator {
    loaded: Vec<ActionId>,
    catalog: Arc<dyn ActionCatalog>,
    groups: Arc<dyn GroupRegistry>,
    max_shift: usize,
}

impl OpenerComparator {
    pub fn new(catalog: Arc<dyn ActionCatalog>, groups: Arc<dyn GroupRegistry>) -> Self {
        Self {
            loaded: Vec::new(),
            catalog,
            groups,
            max_shift: DEFAULT_MAX_SHIFT,
        }
    }

    pub fn with_max_shift(mut self, max_shift: usize) -> Self {
        self.max_shift = max_shift;
        self
    }

    pub fn with_loaded(mut self, loaded: Vec<ActionId>) -> Self {
        self.loaded = loaded;
        self
    }

    pub fn set_loaded(&mut self, loaded: Vec<ActionId>) {
        self.loaded = loaded;
    }

    pub fn loaded(&self) -> &[ActionId] {
        &self.loaded
    }

    /// Display name of an opener slot: action, group, or catch-all.
    pub fn describe(&self, id: ActionId) -> String {
        slot_name(self.catalog.as_ref(), self.groups.as_ref(), id)
    }

    pub fn action_name(&self, id: RawActionId) -> String {
        self.catalog.action_name(id)
    }

    pub fn max_shift(&self) -> usize {
        self.max_shift
    }

    /// Does the recorded `actual` satisfy the opener slot `expected`?
    pub fn matches(&self, expected: ActionId, actual: RawActionId) -> bool {
        match expected {
            ActionId::CatchAll => true,
            ActionId::Group(index) => self
                .groups
                .group(index)
                .map(|group| group.contains(actual))
                .unwrap_or(false),
            ActionId::Ordinary(id) => {
                if self.catalog.is_old_action(id) {
                    return false;
                }
                id == actual
                    || self
                        .catalog
                        .same_actions_by_name(&self.catalog.action_name(id), actual)
            }
        }
    }

    /// Compare `used` against the loaded opener.
    ///
    /// `on_error` is called with the 0-indexed opener position of every
    /// mismatch; `on_feedback` is called once with the finished log.
    pub fn compare<F, E>(&self, used: &[RawActionId], on_feedback: F, mut on_error: E)
    where
        F: FnOnce(Feedback),
        E: FnMut(usize),
    {
        let loaded = self.loaded.as_slice();
        let matches = |expected: ActionId, actual: RawActionId| self.matches(expected, actual);

        let mut feedback = Feedback::new();
        let mut errors = 0usize;
        let mut shift: Option<Shift> = None;
        let mut last_reported: Option<usize> = None;
        let (mut li, mut ui) = (0usize, 0usize);

        while li < loaded.len() && ui < used.len() {
            let expected = loaded[li];
            let actual = used[ui];

            if matches(expected, actual) {
                tracing::trace!(position = li + 1, %expected, actual, "match");
                li += 1;
                ui += 1;
                continue;
            }

            // Realigned past extra actions onto a position that was already reported.
            if last_reported == Some(li) {
                li += 1;
                ui += 1;
                continue;
            }

            errors += 1;
            last_reported = Some(li);
            tracing::debug!(position = li + 1, %expected, actual, "mismatch");
            self.add_difference(&mut feedback, li, expected, actual);
            on_error(li);

            if shift.is_none() {
                if let Some(found) = detect_shift(loaded, used, li, ui, self.max_shift, &matches) {
                    tracing::debug!(position = li + 1, shift = %found, "opener shifted");
                    self.add_shift(&mut feedback, found, li);
                    shift = Some(found);
                    match found {
                        Shift::Skipped(d) => li += d,
                        Shift::Extra(d) => ui += d,
                    }
                    continue;
                }
            }

            li += 1;
            ui += 1;
        }

        let drifted = shift.is_none() && Self::add_drift(&mut feedback, &loaded[li..], used.len() - ui);

        if errors == 0 && shift.is_none() && !drifted {
            feedback.add_success(SUCCESS_MESSAGE);
        }

        tracing::debug!(
            loaded = loaded.len(),
            used = used.len(),
            errors,
            entries = feedback.len(),
            "comparison finished"
        );
        on_feedback(feedback);
    }

    /// Run [`compare`](Self::compare) and collect its callbacks.
    pub fn compare_report(&self, used: &[RawActionId]) -> ComparisonReport {
        let mut feedback = Feedback::new();
        let mut wrong_actions = Vec::new();
        self.compare(used, |f| feedback = f, |i| wrong_actions.push(i));
        ComparisonReport {
            feedback,
            wrong_actions,
        }
    }

    fn add_difference(
        &self,
        feedback: &mut Feedback,
        position: usize,
        expected: ActionId,
        actual: RawActionId,
    ) {
        let catalog = Arc::clone(&self.catalog);
        let groups = Arc::clone(&self.groups);
        feedback.add_error_with(move || {
            format!(
                "Difference in action {}: expected {}, got {}",
                position + 1,
                slot_name(catalog.as_ref(), groups.as_ref(), expected),
                catalog.action_name(actual)
            )
        });
    }

    fn add_shift(&self, feedback: &mut Feedback, shift: Shift, position: usize) {
        let catalog = Arc::clone(&self.catalog);
        let groups = Arc::clone(&self.groups);
        let d = shift.offset();
        let skipped: Vec<ActionId> = match shift {
            Shift::Skipped(_) => self.loaded[position..position + d].to_vec(),
            Shift::Extra(_) => Vec::new(),
        };
        feedback.add_info_with(move || match shift {
            Shift::Skipped(_) => {
                let names: Vec<String> = skipped
                    .iter()
                    .map(|id| slot_name(catalog.as_ref(), groups.as_ref(), *id))
                    .collect();
                format!(
                    "You shifted your opener by {} action(s): skipped {} at action {}.",
                    d,
                    names.join(", "),
                    position + 1
                )
            }
            Shift::Extra(_) => format!(
                "You shifted your opener by {} action(s): {} unplanned action(s) before action {}.",
                d,
                d,
                position + 1
            ),
        });
    }

    /// Record a length mismatch left over after the walk. Returns whether one was recorded.
    fn add_drift(feedback: &mut Feedback, loaded_rest: &[ActionId], used_rest: usize) -> bool {
        let missing = loaded_rest.iter().filter(|id| !id.is_catch_all()).count();
        if missing > 0 {
            tracing::debug!(missing, "recording shorter than opener");
            feedback.add_info_with(move || {
                format!(
                    "Recorded actions fall short of the opener by {} action(s).",
                    missing
                )
            });
            true
        } else if used_rest > 0 {
            tracing::debug!(extra = used_rest, "recording longer than opener");
            feedback.add_info_with(move || {
                format!(
                    "Recorded actions run past the opener by {} action(s).",
                    used_rest
                )
            });
            true
        } else {
            false
        }
    }
}

/// Display name of an opener slot.
fn slot_name(catalog: &dyn ActionCatalog, groups: &dyn GroupRegistry, id: ActionId) -> String {
    match id {
        ActionId::CatchAll => catalog.action_name(0),
        ActionId::Ordinary(raw) => catalog.action_name(raw),
        ActionId::Group(index) => groups
            .group(index)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("Unknown group #{}", index)),
    }
}
