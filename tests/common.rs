#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttk() -> Command {
    cargo_bin_cmd!("timetrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique test projects-file path inside the system temp dir
pub fn setup_projects_file(name: &str, projects: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_projects.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&path, format!("{}\n", projects.join("\n"))).unwrap();
    p
}

/// Initialize a throwaway DB (test mode: no config file written)
pub fn init_test_db(db_path: &str, projects_path: &str) {
    ttk()
        .args([
            "--db",
            db_path,
            "--projects-file",
            projects_path,
            "--test",
            "init",
        ])
        .assert()
        .success();
}
