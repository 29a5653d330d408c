use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{repository_dir, run_jot_command};

#[rstest]
fn asks_for_identity_when_unconfigured(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please, tell me who you are."));
}

#[rstest]
fn stores_and_confirms_a_username(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["config", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The username is alice."));
}

#[rstest]
fn remembers_the_username_across_invocations(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["config", "alice"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The username is alice."));
}

#[rstest]
fn overwrites_the_previous_username(repository_dir: TempDir) {
    run_jot_command(repository_dir.path(), &["config", "alice"])
        .assert()
        .success();

    run_jot_command(repository_dir.path(), &["config", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The username is bob."));
}
