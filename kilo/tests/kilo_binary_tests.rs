// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `kilo` binary without a terminal on stdin, where entering raw mode must fail
//! cleanly.

use std::process::{Command, Stdio};

const KILO_BIN: &str = env!("CARGO_BIN_EXE_kilo");

#[cfg(unix)]
#[test]
fn test_non_tty_stdin_is_fatal_tcgetattr_error() {
    let output = Command::new(KILO_BIN)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run kilo");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tcgetattr"), "stderr: {stderr}");

    // Nothing was read, so nothing was reported.
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_exits_successfully() {
    let output = Command::new(KILO_BIN)
        .arg("--help")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run kilo");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--enable-logging"), "stdout: {stdout}");
}

#[test]
fn test_bad_log_level_is_a_usage_error() {
    let output = Command::new(KILO_BIN)
        .args(["--log-level", "loud"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run kilo");

    // clap reports usage errors with status 2, before the terminal is touched.
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
#[test]
fn test_fatal_error_is_logged_to_file() {
    let dir = std::env::temp_dir().join(format!("r3bl_kilo_bin_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let log_file = dir.join("kilo.log");

    let output = Command::new(KILO_BIN)
        .arg("--enable-logging")
        .arg("--log-file")
        .arg(&log_file)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run kilo");

    assert_eq!(output.status.code(), Some(1));
    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Session ended with a fatal error"), "log: {contents}");

    std::fs::remove_dir_all(&dir).ok();
}
