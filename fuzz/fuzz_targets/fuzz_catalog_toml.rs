#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use opener::{ActionCatalog, ActionTable, Job};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(table) = ActionTable::from_toml_str(content, Path::new("fuzz.toml")) {
            for id in table.ids() {
                let name = table.action_name(id);
                assert!(table.same_actions_by_name(&name, id));
            }
            let _ = table.search("a", &Job::Any);
        }
    }
});
