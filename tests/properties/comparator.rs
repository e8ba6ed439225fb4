//! Property tests for opener comparison.

use std::sync::Arc;

use proptest::prelude::*;

use opener::{ActionId, GroupTable, MessageType, OpenerComparator, UnnamedCatalog};

/// Opener slots: catch-all, a handful of actions, the dancer step group, and an unknown group.
fn opener_slot() -> impl Strategy<Value = ActionId> {
    prop_oneof![
        1 => Just(ActionId::CatchAll),
        6 => (1u32..8).prop_map(ActionId::Ordinary),
        2 => Just(ActionId::Group(1)),
        1 => Just(ActionId::Group(2)),
    ]
}

/// Recorded actions, including dancer steps inside and outside the built-in group.
fn recorded_action() -> impl Strategy<Value = u32> {
    prop_oneof![
        6 => 1u32..8,
        1 => Just(15999u32),
        1 => Just(16002u32),
        1 => Just(16003u32),
    ]
}

fn comparator(opener: Vec<ActionId>) -> OpenerComparator {
    OpenerComparator::new(Arc::new(UnnamedCatalog), Arc::new(GroupTable::builtin()))
        .with_loaded(opener)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an exact replay of the opener gets a single success and no errors.
    #[test]
    fn property_identical_sequences_are_perfect(
        ids in proptest::collection::vec(1u32..50, 0..12),
    ) {
        let opener = ids.iter().copied().map(ActionId::Ordinary).collect();
        let report = comparator(opener).compare_report(&ids);

        prop_assert_eq!(
            report.feedback.kinds().collect::<Vec<_>>(),
            vec![MessageType::Success]
        );
        prop_assert!(report.wrong_actions.is_empty());
    }

    /// PROPERTY: a catch-all slot accepts whatever was pressed in its place.
    #[test]
    fn property_catch_all_substitution_keeps_success(
        ids in proptest::collection::vec(1u32..50, 1..12),
        slot in any::<prop::sample::Index>(),
        pressed in 1u32..100_000,
    ) {
        let k = slot.index(ids.len());
        let mut opener: Vec<ActionId> = ids.iter().copied().map(ActionId::Ordinary).collect();
        opener[k] = ActionId::CatchAll;
        let mut used = ids.clone();
        used[k] = pressed;

        let report = comparator(opener).compare_report(&used);

        prop_assert!(report.is_perfect(), "feedback: {:?}", report.feedback);
    }

    /// PROPERTY: every error callback has exactly one Error entry, positions
    /// rise strictly and stay inside the opener.
    #[test]
    fn property_error_callbacks_match_error_entries(
        opener in proptest::collection::vec(opener_slot(), 0..12),
        used in proptest::collection::vec(recorded_action(), 0..12),
    ) {
        let len = opener.len();
        let cmp = comparator(opener);

        let mut feedback_calls = 0;
        let mut errors_in_log = 0;
        let mut positions = Vec::new();
        cmp.compare(
            &used,
            |f| {
                feedback_calls += 1;
                errors_in_log = f.count(MessageType::Error);
            },
            |i| positions.push(i),
        );

        prop_assert_eq!(feedback_calls, 1);
        prop_assert_eq!(errors_in_log, positions.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]), "positions: {:?}", positions);
        prop_assert!(positions.iter().all(|&i| i < len));
    }

    /// PROPERTY: at most one shift or drift note, and success only when nothing else was said.
    #[test]
    fn property_success_excludes_other_feedback(
        opener in proptest::collection::vec(opener_slot(), 0..12),
        used in proptest::collection::vec(recorded_action(), 0..12),
    ) {
        let report = comparator(opener).compare_report(&used);
        let feedback = &report.feedback;

        let successes = feedback.count(MessageType::Success);
        let infos = feedback.count(MessageType::Info);
        let errors = feedback.count(MessageType::Error);

        prop_assert!(infos <= 1);
        prop_assert!(successes <= 1);
        prop_assert_eq!(successes == 1, errors == 0 && infos == 0);
    }

    /// PROPERTY: comparison is deterministic.
    #[test]
    fn property_compare_is_idempotent(
        opener in proptest::collection::vec(opener_slot(), 0..12),
        used in proptest::collection::vec(recorded_action(), 0..12),
    ) {
        let cmp = comparator(opener);
        prop_assert_eq!(cmp.compare_report(&used), cmp.compare_report(&used));
    }
}
