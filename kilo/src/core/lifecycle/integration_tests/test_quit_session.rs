// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Types `a`, `b`, `q` into a real PTY running the [`LifecycleController`] with the
//! input loop, and checks the reports, the restored settings, and the exit status.

use crate::{CONTROLLED_READY, CONTROLLED_STARTING, InputLoopController,
            LifecycleController, PtyLineReader, StdinTerminal, exit_with_failure,
            exit_with_success, generate_pty_test, report_line};
use rustix::termios::{LocalModes, tcgetattr};
use std::{io::Write, time::Duration};

generate_pty_test! {
    test_fn: test_pty_quit_session_exits_cleanly,
    controller: pty_controller_entry_point,
    controlled: pty_controlled_entry_point
}

fn pty_controller_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = PtyLineReader::new(&pty_pair);
    reader.wait_for(CONTROLLED_STARTING, Duration::from_secs(10));
    reader.wait_for(CONTROLLED_READY, Duration::from_secs(10));

    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");
    writer.write_all(b"abq").expect("Failed to write input");
    writer.flush().expect("Failed to flush input");
    eprintln!("📝 Controller: sent \"abq\"");

    // Nothing is echoed in raw mode, so each line is exactly one report.
    for expected in ["97 ('a')", "98 ('b')", "113 ('q')"] {
        let line = reader.wait_for(expected, Duration::from_secs(5));
        assert_eq!(line, expected);
    }

    let verdict = reader.wait_for_success(Duration::from_secs(10));
    eprintln!("✅ Controller: {verdict}");

    let status = child.wait().expect("Failed to wait for child");
    assert!(status.success(), "Controlled process failed: {status:?}");
}

fn pty_controlled_entry_point() -> ! {
    let Ok(original) = tcgetattr(std::io::stdin()) else {
        exit_with_failure("Could not read termios");
    };

    let lifecycle = LifecycleController::new();
    let result = lifecycle.run(StdinTerminal::new(), || {
        report_line(CONTROLLED_READY);
        InputLoopController::new(StdinTerminal::new(), std::io::stdout().lock()).run()
    });

    if let Err(e) = result {
        exit_with_failure(&format!("session failed: {e}"));
    }

    let Ok(restored) = tcgetattr(std::io::stdin()) else {
        exit_with_failure("Could not read termios");
    };
    let canonical = LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG;
    if restored.local_modes & canonical != original.local_modes & canonical {
        exit_with_failure("local modes were not restored");
    }
    if lifecycle.context().restore_attempt_count() != 1 {
        exit_with_failure(&format!(
            "expected 1 restore, got {}",
            lifecycle.context().restore_attempt_count()
        ));
    }

    exit_with_success("session quit on 'q' and restored the terminal");
}
