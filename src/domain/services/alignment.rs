//! Shift detection for opener comparison
//!
//! When a recorded action does not match the opener, the rest of the
//! recording may still line up with the opener at a constant offset: an
//! opener action was dropped (everything after it moved one slot earlier) or
//! an unplanned action was pressed (everything moved one slot later).
//!
//! Candidate offsets are scored by how many of the remaining positions match
//! under that offset. Catch-all slots match anything and would inflate every
//! score equally, so they are not counted.

use std::fmt;

use crate::domain::value_objects::{ActionId, RawActionId};

/// A constant offset between the opener and the recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// `n` opener actions were never performed.
    Skipped(usize),
    /// `n` actions were performed that the opener does not contain.
    Extra(usize),
}

impl Shift {
    pub fn offset(&self) -> usize {
        match self {
            Shift::Skipped(n) | Shift::Extra(n) => *n,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Skipped(n) => write!(f, "skipped {}", n),
            Shift::Extra(n) => write!(f, "extra {}", n),
        }
    }
}

/// Number of positions where `loaded` and `used` agree, zipped from the start.
pub(crate) fn tail_score<F>(loaded: &[ActionId], used: &[RawActionId], matches: &F) -> usize
where
    F: Fn(ActionId, RawActionId) -> bool,
{
    loaded
        .iter()
        .zip(used)
        .filter(|(expected, actual)| !expected.is_catch_all() && matches(**expected, **actual))
        .count()
}

/// Find the offset that best explains a mismatch at `loaded[li]` / `used[ui]`.
///
/// Returns `None` unless some offset up to `max_shift` matches strictly more
/// of the remaining positions than staying aligned does. Ties go to the
/// smaller offset, and to `Skipped` over `Extra` at the same offset.
pub(crate) fn detect_shift<F>(
    loaded: &[ActionId],
    used: &[RawActionId],
    li: usize,
    ui: usize,
    max_shift: usize,
    matches: &F,
) -> Option<Shift>
where
    F: Fn(ActionId, RawActionId) -> bool,
{
    let baseline = tail_score(
        loaded.get(li + 1..).unwrap_or(&[]),
        used.get(ui + 1..).unwrap_or(&[]),
        matches,
    );

    let mut best: Option<(Shift, usize)> = None;
    for d in 1..=max_shift {
        let candidates = [
            (Shift::Skipped(d), loaded.get(li + d..), used.get(ui..)),
            (Shift::Extra(d), loaded.get(li..), used.get(ui + d..)),
        ];
        for (shift, l, u) in candidates {
            let (Some(l), Some(u)) = (l, u) else {
                continue;
            };
            let score = tail_score(l, u, matches);
            let to_beat = best.map(|(_, s)| s).unwrap_or(baseline);
            if score > to_beat {
                best = Some((shift, score));
            }
        }
    }

    best.map(|(shift, _)| shift)
}
