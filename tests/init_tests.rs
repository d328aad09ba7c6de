use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{att, setup_data_dir};

/// Run with a fixed relative `--data-dir` under a sandboxed home and cwd,
/// so the resolution of the override is observable from the outside
fn in_sandbox(home: &str, cwd: &str, args: &[&str]) -> Command {
    let mut cmd = att();
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .current_dir(cwd)
        .args(["--data-dir", "mydata"])
        .args(args);
    cmd
}

#[test]
fn test_relative_data_dir_is_rooted_in_config_dir() {
    let home = setup_data_dir("relative_home");
    let cwd = setup_data_dir("relative_cwd");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&cwd).unwrap();

    in_sandbox(&home, &cwd, &["--test", "init"])
        .assert()
        .success();

    in_sandbox(
        &home,
        &cwd,
        &["add", "--from", "leader_a", "leader_a", "Alice", "leader"],
    )
    .assert()
    .success();

    // nothing may leak into the process cwd
    assert!(
        fs::metadata(Path::new(&cwd).join("mydata")).is_err(),
        "records must not land under the process cwd"
    );

    // a later invocation with the same override sees the same records
    in_sandbox(&home, &cwd, &["list", "--from", "leader_a"])
        .assert()
        .success()
        .stdout(contains("Alice"));
}
