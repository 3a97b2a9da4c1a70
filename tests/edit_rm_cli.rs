mod support;

use predicates::str::contains;

use support::TestStore;

#[test]
fn full_session_flow() {
    let store = TestStore::new();

    store.cmd().args(["add", "One"]).assert().success();
    store.cmd().args(["add", "Two"]).assert().success();
    store.cmd().args(["add", "@work Three"]).assert().success();

    assert_eq!(store.read_todo(), "One\nTwo\n@work Three\n");

    // Item 1 of the @work view is the third task overall
    store
        .cmd()
        .args(["edit", "1", "@work Three Edited", "--project", "work"])
        .assert()
        .success()
        .stdout(contains("Updated task 1: @work Three Edited"));

    assert_eq!(store.read_todo(), "One\nTwo\n@work Three Edited\n");

    store.cmd().args(["rm", "2"]).assert().success();

    assert_eq!(store.read_todo(), "One\n@work Three Edited\n");
}

#[test]
fn edit_rejects_empty_replacement() {
    let store = TestStore::new();
    store.write_todo("Original\n");

    store
        .cmd()
        .args(["edit", "1", ""])
        .assert()
        .failure()
        .code(2);

    assert_eq!(store.read_todo(), "Original\n");
}

#[test]
fn rm_reports_the_removed_task() {
    let store = TestStore::new();
    store.write_todo("One\nTwo\n");

    store
        .cmd()
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted: One"));

    assert_eq!(store.read_todo(), "Two\n");
}

#[test]
fn filtered_rm_removes_the_addressed_duplicate() {
    let store = TestStore::new();
    store.write_todo("@w Same\nother\n@w Same\n");

    // Item 2 of the @w view is the last line; the first copy must survive.
    store
        .cmd()
        .args(["rm", "2", "--project", "w"])
        .assert()
        .success();

    assert_eq!(store.read_todo(), "@w Same\nother\n");
}

#[test]
fn out_of_range_numbers_are_user_errors() {
    let store = TestStore::new();
    store.write_todo("One\nTwo\n");

    // Numbering starts at 1
    store
        .cmd()
        .args(["show", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("numbering starts at 1"));

    store
        .cmd()
        .args(["show", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:"))
        .stderr(contains("hint: todone list"));

    // Bound is the filtered view, not the whole list
    store.write_todo("One\n@work Two\n");
    store
        .cmd()
        .args(["rm", "2", "--project", "work"])
        .assert()
        .failure()
        .code(2);

    assert_eq!(store.read_todo(), "One\n@work Two\n");
}

#[test]
fn show_prints_a_single_task() {
    let store = TestStore::new();
    store.write_todo("One\n@work Two\n");

    store
        .cmd()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(contains("@work Two"));

    store
        .cmd()
        .args(["show", "1", "--project", "work"])
        .assert()
        .success()
        .stdout(contains("@work Two"));
}
