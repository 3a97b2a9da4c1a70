mod support;

use predicates::str::contains;
use serde_json::Value;

use support::TestStore;

#[test]
fn done_removes_and_archives_with_timestamp() {
    let store = TestStore::new();
    store.write_todo("One\nTwo\n");

    store
        .cmd()
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(contains("Completed: One"));

    assert_eq!(store.read_todo(), "Two\n");

    let archive = store.read_done();
    let lines: Vec<&str> = archive.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("One COMPLETED:"));
    // Sortable ISO-8601, UTC
    let stamp = lines[0].strip_prefix("One COMPLETED:").unwrap();
    assert!(stamp.ends_with('Z'));
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], "T");
}

#[test]
fn done_within_a_project_view() {
    let store = TestStore::new();
    store.write_todo("One\n@work Two\nThree\n");

    store
        .cmd()
        .args(["done", "1", "--project", "work"])
        .assert()
        .success();

    assert_eq!(store.read_todo(), "One\nThree\n");
    assert!(store.read_done().starts_with("@work Two COMPLETED:"));
}

#[test]
fn failed_done_leaves_the_archive_untouched() {
    let store = TestStore::new();
    store.write_todo("Only\n");

    store
        .cmd()
        .args(["done", "4"])
        .assert()
        .failure()
        .code(2);

    assert_eq!(store.read_todo(), "Only\n");
    assert_eq!(store.read_done(), "");
}

#[test]
fn done_json_reports_the_completed_task() {
    let store = TestStore::new();
    store.write_todo("One\nTwo\n");

    let output = store
        .cmd()
        .args(["done", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("done json");
    assert_eq!(value["command"].as_str(), Some("done"));
    assert_eq!(value["data"]["text"].as_str(), Some("Two"));
    assert_eq!(value["data"]["remaining"].as_u64(), Some(1));
}

#[test]
fn json_error_envelope_has_code_and_kind() {
    let store = TestStore::new();
    store.write_todo("One\n");

    let output = store
        .cmd()
        .args(["done", "9", "--json"])
        .assert()
        .failure()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("error json");
    assert_eq!(value["status"].as_str(), Some("error"));
    assert_eq!(value["error"]["code"].as_i64(), Some(2));
    assert_eq!(value["error"]["kind"].as_str(), Some("user_error"));
    assert_eq!(value["error"]["details"]["index"].as_u64(), Some(8));
    assert_eq!(value["error"]["details"]["len"].as_u64(), Some(1));
}

#[test]
fn completions_accumulate_across_runs() {
    let store = TestStore::new();
    store.write_todo("First\nSecond\n");

    store.cmd().args(["done", "1"]).assert().success();
    store.cmd().args(["done", "1"]).assert().success();

    let archive = store.read_done();
    let lines: Vec<&str> = archive.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("First COMPLETED:"));
    assert!(lines[1].starts_with("Second COMPLETED:"));
}
