#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use staysync::store::Store;

pub fn staysync() -> Command {
    cargo_bin_cmd!("staysync")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staysync.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Answers for a complete run of the setup wizard (2 floors × 3 rooms from 100).
pub const SETUP_ANSWERS: &str = "Olivia Owner\nowner@hotel.test\nowner-pw\n\
Max Manager\nmanager@hotel.test\nmanager-pw\n\
Sam Super\nsu@hotel.test\nsu-pw\n\
2\n3\n100\nStandard Queen\n";

/// Init the store in test mode (no config file written).
pub fn init(db_path: &str) {
    staysync()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init, switch to live mode and run the whole setup wizard.
pub fn init_live(db_path: &str) {
    init(db_path);

    staysync()
        .args(["--db", db_path, "mode", "--live", "--yes"])
        .assert()
        .success();

    staysync()
        .args(["--db", db_path, "setup"])
        .write_stdin(SETUP_ANSWERS)
        .assert()
        .success();
}

pub fn memory_store() -> Store {
    Store::open_in_memory().expect("in-memory store")
}
