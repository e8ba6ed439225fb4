//! Test fixtures - reusable content for CLI tests.

/// A small Dancer data sheet; 3640 is an obsolete action.
pub const DANCER_CATALOG: &str = r#"
[[actions]]
id = 0
name = "Catch All"

[[actions]]
id = 15989
name = "Cascade"
job = "DNC"

[[actions]]
id = 15990
name = "Fountain"
job = "DNC"

[[actions]]
id = 15997
name = "Standard Step"
job = "DNC"

[[actions]]
id = 15999
name = "Emboite"
job = "DNC"

[[actions]]
id = 16000
name = "Entrechat"
job = "DNC"

[[actions]]
id = 16007
name = "Fan Dance"
job = "DNC"

[[actions]]
id = 16009
name = "Fan Dance III"
job = "DNC"

[[actions]]
id = 3640
name = "Leg Sweep"
obsolete = true

[[actions]]
id = 7557
name = "Sprint"
job = "BRD MCH DNC"
"#;

/// Project config with a custom group and a catalog path.
#[allow(dead_code)]
pub const PROJECT_CONFIG: &str = r#"
[compare]
max_shift = 2

[catalog]
path = "actions.toml"

[[groups]]
name = "Fan Dances"
description = "Any Fan Dance"
actions = [16007, 16009]
"#;
