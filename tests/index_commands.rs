use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{repository_dir, run_jot_command, write_file, write_random_file};

#[rstest]
fn listing_an_empty_index_asks_to_add_a_file(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a file to the index."));
}

#[rstest]
fn tracking_an_existing_file_succeeds(repository_dir: TempDir) {
    let (file_name, _) = write_random_file(&repository_dir);

    run_jot_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "The file '{file_name}' is tracked."
        )));

    let index_content =
        std::fs::read_to_string(repository_dir.path().join(".jot/index")).unwrap();
    assert_eq!(index_content, format!("{file_name}\n"));
}

#[rstest]
fn tracking_a_missing_file_reports_not_found(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Can't find 'ghost.txt'."));

    let index_content =
        std::fs::read_to_string(repository_dir.path().join(".jot/index")).unwrap();
    assert_eq!(index_content, "");
}

#[rstest]
fn listing_preserves_insertion_order(repository_dir: TempDir) {
    write_file(&repository_dir, "b.txt", "two");
    write_file(&repository_dir, "a.txt", "one");

    run_jot_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tracked files:\nb.txt\na.txt"));
}

#[rstest]
fn re_tracking_a_file_is_idempotent(repository_dir: TempDir) {
    let (file_name, _) = write_random_file(&repository_dir);

    run_jot_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "The file '{file_name}' is tracked."
        )));

    let index_content =
        std::fs::read_to_string(repository_dir.path().join(".jot/index")).unwrap();
    assert_eq!(index_content, format!("{file_name}\n"));
}

#[rstest]
fn tracking_a_nested_file_keeps_its_relative_path(repository_dir: TempDir) {
    write_file(&repository_dir, "docs/guide.txt", "read me");

    run_jot_command(repository_dir.path(), &["add", "docs/guide.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The file 'docs/guide.txt' is tracked.",
        ));

    let index_content =
        std::fs::read_to_string(repository_dir.path().join(".jot/index")).unwrap();
    assert_eq!(index_content, "docs/guide.txt\n");
}
