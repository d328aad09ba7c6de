#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn att() -> Command {
    let mut cmd = cargo_bin_cmd!("attendo");
    // pin the geofence so a developer's config file or environment cannot
    // skew the location tests
    cmd.env("ATTENDO_CENTER_LAT", "41.351376");
    cmd.env("ATTENDO_CENTER_LON", "69.221844");
    cmd.env("ATTENDO_RADIUS_M", "100");
    cmd
}

/// Create a unique test data dir inside the system temp dir and remove any
/// existing contents
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendo_data", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_data_dir(dir: &str) {
    att()
        .args(["--data-dir", dir, "--test", "init"])
        .assert()
        .success();
}

/// Seed a roster with one leader and one student, the minimum useful setup
pub fn seed_roster(dir: &str) {
    att()
        .args([
            "--data-dir",
            dir,
            "add",
            "--from",
            "leader_a",
            "leader_a",
            "Alice",
            "leader",
        ])
        .assert()
        .success();

    att()
        .args([
            "--data-dir",
            dir,
            "add",
            "--from",
            "leader_a",
            "bob",
            "Bob",
            "student",
        ])
        .assert()
        .success();
}
