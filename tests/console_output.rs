//! End-to-end check of the standard-output sink
//!
//! The parent test re-runs this binary, restricted to the child test, and
//! inspects what actually reached the process's stdout.

use log_pipeline::{LogManager, Severity};
use std::env;
use std::process::Command;

const CHILD_ENV: &str = "LOG_PIPELINE_CONSOLE_CHILD";

#[test]
fn test_console_child_writes_to_stdout() {
    if env::var_os(CHILD_ENV).is_none() {
        return;
    }

    let manager = LogManager::new();
    manager.set_level(Severity::Info);
    manager.start();
    manager.log(Severity::Info, "src/lib/foo.cpp", "bar", "hi");
    manager.log(Severity::Debug, "src/lib/foo.cpp", "bar", "filtered");
    manager.stop();
}

#[test]
fn test_console_writes_canonical_line() {
    let exe = env::current_exe().expect("Failed to locate test binary");
    let output = Command::new(exe)
        .args([
            "--exact",
            "test_console_child_writes_to_stdout",
            "--nocapture",
            "--test-threads=1",
            "-q",
        ])
        .env(CHILD_ENV, "1")
        .output()
        .expect("Failed to run child test");

    assert!(output.status.success(), "child failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("[INFO] foo.cpp bar - hi\n").count(), 1, "{}", stdout);
    assert!(!stdout.contains("filtered"), "{}", stdout);
}
