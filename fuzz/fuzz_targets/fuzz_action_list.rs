#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(ids) = opener::parse_action_list(content) {
            for id in ids {
                assert_eq!(opener::ActionId::try_from(id.raw()).ok(), Some(id));
            }
        }
    }
});
