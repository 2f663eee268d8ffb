mod common;

use common::TestEnv;

#[test]
fn test_apply_json_emits_ndjson_event_stream() {
    let env = TestEnv::with_payloads();

    let result = env.run(&[
        "--json", "apply", "menus.json", "-a", "check:11", "-a", "select:11", "-a", "check:404",
    ]);

    assert!(result.success, "apply failed: {}", result.stderr);
    let events = result.json_lines();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["start", "checked", "selected", "data", "complete"]);

    for event in &events {
        assert_eq!(event["command"], "apply");
    }

    let checked = &events[1];
    assert_eq!(checked["node"]["key"], "11");
    assert_eq!(checked["node"]["title"], "Users (MENU)");
    assert_eq!(checked["checked"], true);
    assert_eq!(checked["checked_keys"], serde_json::json!(["11"]));

    let selected = &events[2];
    assert_eq!(selected["selected"], true);
    assert_eq!(selected["selected_keys"], serde_json::json!(["1", "11"]));

    let data = &events[3];
    assert_eq!(data["expanded_keys"], serde_json::json!(["1", "2"]));
    assert_eq!(data["checked_keys"], serde_json::json!(["11"]));

    assert_eq!(events[4]["success"], true);
    assert_eq!(events[4]["interactions"], 2);
}

#[test]
fn test_apply_json_delete_event_lists_descendants() {
    let env = TestEnv::with_payloads();

    let result = env.run(&["--json", "apply", "menus.json", "-a", "delete:1"]);

    assert!(result.success, "apply failed: {}", result.stderr);
    let events = result.json_lines();
    let deleted = events
        .iter()
        .find(|e| e["event"] == "deleted")
        .expect("deleted event");
    assert_eq!(deleted["node"]["key"], "1");
    assert_eq!(deleted["descendants"], serde_json::json!(["11", "12"]));
}

#[test]
fn test_json_error_event_on_failure() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "apply", "absent.json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_lines();
    assert_eq!(events.len(), 1, "stdout:\n{}", result.stdout);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["code"], "IO");
    assert!(events[0]["message"]
        .as_str()
        .unwrap()
        .contains("failed to load menus"));
}

#[test]
fn test_json_invalid_payload_error_code() {
    let env = TestEnv::new();
    env.write("menus.json", r#"[{"name": "No id"}]"#);

    let result = env.run(&["--json", "show", "menus.json"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_lines();
    assert_eq!(events[0]["code"], "INVALID_PAYLOAD");
}
