#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

pub fn write_random_file(dir: &TempDir) -> (String, String) {
    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    write_file(dir, &file_name, &file_content);
    (file_name, file_content)
}

pub fn track_and_commit(dir: &TempDir, file_name: &str, message: &str) {
    run_jot_command(dir.path(), &["add", file_name])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", message])
        .assert()
        .success();
}

/// Snapshot hash of HEAD, read from the newest entry of `jot log`.
pub fn head_commit_id(dir: &TempDir) -> String {
    let output = run_jot_command(dir.path(), &["log"])
        .output()
        .expect("Failed to run log");
    let stdout = String::from_utf8(output.stdout).expect("log output is not UTF-8");

    stdout
        .lines()
        .find_map(|line| line.strip_prefix("commit "))
        .expect("no commit line in log output")
        .to_string()
}

/// Number of history records persisted in the log file.
pub fn log_record_count(dir: &TempDir) -> usize {
    let content =
        std::fs::read_to_string(dir.path().join(".jot/log")).expect("Failed to read log file");
    content.lines().count() / 3
}
