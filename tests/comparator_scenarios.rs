//! Scenario tests for opener comparison.
//!
//! Each test replays a recorded rotation against an opener through the
//! public API and checks the exact feedback a player would see.

use std::path::Path;
use std::sync::Arc;

use opener::infrastructure::ActionRecord;
use opener::{
    ActionId, ActionTable, GroupOfActions, GroupTable, MessageType, OpenerComparator,
    OLD_ACTION_NAME,
};

const CASCADE: u32 = 1;
const FOUNTAIN: u32 = 2;
const WINDMILL: u32 = 3;
const BLADESHOWER: u32 = 4;
const STANDARD_STEP: u32 = 5;
const FLOURISH: u32 = 6;
const SPRINT: u32 = 99;
const LEG_SWEEP: u32 = 3640;
const EMBOITE: u32 = 15999;
const ENTRECHAT: u32 = 16000;
const JETE: u32 = 16001;

fn record(id: u32, name: &str, obsolete: bool) -> ActionRecord {
    ActionRecord {
        id,
        name: name.to_string(),
        job: Some("DNC".to_string()),
        obsolete,
    }
}

fn catalog() -> ActionTable {
    ActionTable::from_records(
        vec![
            record(CASCADE, "Cascade", false),
            record(FOUNTAIN, "Fountain", false),
            record(WINDMILL, "Windmill", false),
            record(BLADESHOWER, "Bladeshower", false),
            record(STANDARD_STEP, "Standard Step", false),
            record(FLOURISH, "Flourish", false),
            record(SPRINT, "Sprint", false),
            record(LEG_SWEEP, "Leg Sweep", true),
            record(EMBOITE, "Emboite", false),
            record(ENTRECHAT, "Entrechat", false),
            record(JETE, "Jete", false),
        ],
        Path::new("scenario.toml"),
    )
    .unwrap()
}

fn comparator(opener: &[i64]) -> OpenerComparator {
    let groups = GroupTable::new(vec![GroupOfActions::new(
        "Dancer Steps",
        "",
        vec![EMBOITE, ENTRECHAT],
    )]);
    OpenerComparator::new(Arc::new(catalog()), Arc::new(groups))
        .with_loaded(opener.iter().map(|&raw| ActionId::try_from(raw).unwrap()).collect())
}

fn run(opener: &[i64], used: &[u32]) -> (Vec<(MessageType, String)>, Vec<usize>) {
    let mut entries = Vec::new();
    let mut errors = Vec::new();
    comparator(opener).compare(used, |f| entries = f.entries(), |i| errors.push(i));
    (entries, errors)
}

/// SCENARIO: the recording reproduces the opener exactly.
#[test]
fn scenario_perfect_opener() {
    let (entries, errors) = run(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]);

    assert_eq!(
        entries,
        vec![(
            MessageType::Success,
            "Great job! Opener executed perfectly.".to_string()
        )]
    );
    assert!(errors.is_empty());
}

/// SCENARIO: nothing loaded and nothing recorded.
#[test]
fn scenario_empty_sequences_succeed() {
    let (entries, errors) = run(&[], &[]);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, MessageType::Success);
    assert!(errors.is_empty());
}

/// SCENARIO: two wrong presses, one of them on a catch-all neighbour.
#[test]
fn scenario_two_wrong_actions() {
    let (entries, errors) = run(&[1, 2, 3, 0, 2], &[1, 5, 3, 1, 1]);

    assert_eq!(
        entries,
        vec![
            (
                MessageType::Error,
                "Difference in action 2: expected Fountain, got Standard Step".to_string()
            ),
            (
                MessageType::Error,
                "Difference in action 5: expected Fountain, got Cascade".to_string()
            ),
        ]
    );
    assert_eq!(errors, vec![1, 4]);
}

/// SCENARIO: one opener action was dropped and everything after it moved up a slot.
#[test]
fn scenario_dropped_action_shifts_opener() {
    let (entries, errors) = run(&[1, 2, 3, 0, 5, 6], &[1, 3, 4, 5, 6, 99]);

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        (
            MessageType::Error,
            "Difference in action 2: expected Fountain, got Windmill".to_string()
        )
    );
    assert_eq!(entries[1].0, MessageType::Info);
    assert_eq!(
        entries[1].1,
        "You shifted your opener by 1 action(s): skipped Fountain at action 2."
    );
    assert!(entries[1].1.contains("by 1 action"));
    assert_eq!(errors, vec![1]);
}

/// SCENARIO: an unplanned Sprint was pressed mid-opener.
#[test]
fn scenario_extra_action_shifts_opener() {
    let (entries, errors) = run(&[1, 2, 3, 4], &[1, 99, 2, 3, 4]);

    assert_eq!(
        entries,
        vec![
            (
                MessageType::Error,
                "Difference in action 2: expected Fountain, got Sprint".to_string()
            ),
            (
                MessageType::Info,
                "You shifted your opener by 1 action(s): 1 unplanned action(s) before action 2."
                    .to_string()
            ),
        ]
    );
    assert_eq!(errors, vec![1]);
}

/// SCENARIO: an obsolete action in the opener can never be reproduced.
#[test]
fn scenario_old_action_always_mismatches() {
    let (entries, errors) = run(&[1, 3640, 3], &[1, 3640, 3]);

    assert_eq!(
        entries,
        vec![(
            MessageType::Error,
            format!(
                "Difference in action 2: expected {}, got {}",
                OLD_ACTION_NAME, OLD_ACTION_NAME
            )
        )]
    );
    assert_eq!(errors, vec![1]);
}

/// SCENARIO: group slots accept any dancer step, a plain action in one is wrong.
#[test]
fn scenario_group_with_wrong_action() {
    let (entries, errors) = run(&[2, -1, 1, -1, -1], &[2, 15999, 1, 1, 15999]);

    assert_eq!(
        entries,
        vec![(
            MessageType::Error,
            "Difference in action 4: expected Dancer Steps, got Cascade".to_string()
        )]
    );
    assert_eq!(errors, vec![3]);
}

#[test]
fn group_members_match_and_outsiders_do_not() {
    for step in [EMBOITE, ENTRECHAT] {
        let (entries, errors) = run(&[1, -1], &[1, step]);
        assert_eq!(entries[0].0, MessageType::Success, "step {step}");
        assert!(errors.is_empty());
    }

    let (entries, errors) = run(&[1, -1], &[1, JETE]);
    assert_eq!(
        entries,
        vec![(
            MessageType::Error,
            "Difference in action 2: expected Dancer Steps, got Jete".to_string()
        )]
    );
    assert_eq!(errors, vec![1]);
}

#[test]
fn catch_all_accepts_anything() {
    let (entries, errors) = run(&[1, 0, 3], &[1, 99, 3]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, MessageType::Success);
    assert!(errors.is_empty());
}

/// SCENARIO: the recording stopped before the opener ended.
#[test]
fn scenario_recording_stops_early() {
    let (entries, errors) = run(&[1, 2, 3], &[1, 2]);

    assert_eq!(
        entries,
        vec![(
            MessageType::Info,
            "Recorded actions fall short of the opener by 1 action(s).".to_string()
        )]
    );
    assert!(errors.is_empty());
}

#[test]
fn trailing_catch_all_is_not_missing() {
    let (entries, _) = run(&[1, 2, 0], &[1, 2]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, MessageType::Success);
}

/// SCENARIO: the player kept pressing buttons after the opener.
#[test]
fn scenario_recording_runs_past_opener() {
    let (entries, errors) = run(&[1, 2], &[1, 2, 3, 4]);

    assert_eq!(
        entries,
        vec![(
            MessageType::Info,
            "Recorded actions run past the opener by 2 action(s).".to_string()
        )]
    );
    assert!(errors.is_empty());
}

#[test]
fn comparing_twice_gives_equal_feedback() {
    let cmp = comparator(&[1, 2, 3, 0, 5, 6]);
    let used = [1, 3, 4, 5, 6, 99];

    let first = cmp.compare_report(&used);
    let second = cmp.compare_report(&used);

    assert_eq!(first.feedback, second.feedback);
    assert_eq!(first.wrong_actions, second.wrong_actions);
}

#[test]
fn reloading_the_opener_changes_the_reference() {
    let mut cmp = comparator(&[1, 2]);
    assert!(cmp.compare_report(&[3, 4]).feedback.has_errors());

    cmp.set_loaded(vec![ActionId::Ordinary(3), ActionId::Ordinary(4)]);
    assert!(cmp.compare_report(&[3, 4]).is_perfect());
}

#[test]
fn zero_max_shift_disables_shift_detection() {
    let mut entries = Vec::new();
    let mut errors = Vec::new();
    comparator(&[1, 2, 3, 4])
        .with_max_shift(0)
        .compare(&[1, 3, 4], |f| entries = f.entries(), |i| errors.push(i));

    // Without realignment every later slot is compared one position off.
    assert_eq!(errors, vec![1, 2]);
    assert_eq!(
        entries.last().unwrap(),
        &(
            MessageType::Info,
            "Recorded actions fall short of the opener by 1 action(s).".to_string()
        )
    );
}
