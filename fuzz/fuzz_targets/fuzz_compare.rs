#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use opener::{ActionId, GroupTable, MessageType, OpenerComparator, UnnamedCatalog};

fuzz_target!(|data: &[u8]| {
    // First half is the opener, second half the recording.
    let (opener, used) = data.split_at(data.len() / 2);
    let opener: Vec<ActionId> = opener
        .iter()
        .filter_map(|&b| ActionId::try_from(i64::from(b as i8) % 8).ok())
        .collect();
    let used: Vec<u32> = used.iter().map(|&b| u32::from(b % 8) + 1).collect();

    let comparator =
        OpenerComparator::new(Arc::new(UnnamedCatalog), Arc::new(GroupTable::builtin()))
            .with_loaded(opener);
    let report = comparator.compare_report(&used);

    assert_eq!(
        report.feedback.count(MessageType::Error),
        report.wrong_actions.len()
    );
    let _ = report.feedback.messages();
});
