//! CLI tests for `opener search`

mod common;

use common::*;

#[test]
fn search_output_snapshot() {
    let env = TestEnv::with_catalog();

    let result = env.run(&["search", "fan", "--catalog", "actions.toml"]);

    assert!(result.success, "stderr: {}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r#"
[SEARCH] Action Search
Query: "fan"
Job: ANY
------------------------------------------------------------
  16007  Fan Dance                        DNC
  16009  Fan Dance III                    DNC

[OK] 2 action(s) found
"#);
}

#[test]
fn search_filters_by_job_token() {
    let env = TestEnv::with_catalog();

    let result = env.run(&["search", "--job", "mch", "--catalog", "actions.toml"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Job: MCH"));
    assert!(result.stdout.contains("7557  Sprint"));
    assert!(!result.stdout.contains("Cascade"));
    assert!(result.stdout.contains("1 action(s) found"));
}

#[test]
fn search_hides_obsolete_and_catch_all_entries() {
    let env = TestEnv::with_catalog();

    let result = env.run(&["search", "--catalog", "actions.toml"]);

    assert!(result.success);
    assert!(!result.stdout.contains("Leg Sweep"));
    assert!(!result.stdout.contains("Catch All"));
    assert!(result.stdout.contains("8 action(s) found"), "got:\n{}", result.stdout);
}

#[test]
fn search_without_match_warns() {
    let env = TestEnv::with_catalog();

    let result = env.run(&["search", "zzz", "--catalog", "actions.toml"]);

    assert!(result.success);
    assert!(result.stdout.ends_with("[WARN] No actions match.\n"));
}

#[test]
fn search_reads_catalog_from_env() {
    let env = TestEnv::with_catalog();
    let catalog = env.project_path("actions.toml");

    let result = env.run_with_env(
        &["search", "cascade"],
        &[("OPENER_CATALOG", catalog.to_str().unwrap())],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("15989  Cascade"));
}

#[test]
fn search_requires_a_catalog() {
    let env = TestEnv::new();

    let result = env.run(&["search", "fan"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("search needs an action catalog"));
}

#[test]
fn search_json_lists_records() {
    let env = TestEnv::with_catalog();

    let result = env.run(&["search", "fan", "--json", "--catalog", "actions.toml"]);

    assert!(result.success);
    let events = result.events();
    let data = events.iter().find(|e| e["event"] == "data").unwrap();
    assert_eq!(data["query"], "fan");
    assert_eq!(data["job"], "ANY");
    let ids: Vec<u64> = data["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![16007, 16009]);
}

#[test]
fn search_json_reports_errors_as_events() {
    let env = TestEnv::new();

    let result = env.run(&["search", "--json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    assert_eq!(events.first().unwrap()["event"], "start");
    let error = events.last().unwrap();
    assert_eq!(error["event"], "error");
    assert_eq!(error["command"], "search");
}
