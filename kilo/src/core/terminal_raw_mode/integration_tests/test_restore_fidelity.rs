// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Entering and restoring raw mode on a real PTY, repeatedly, must always land back on
//! exactly the settings that were in effect before the first entry.

use super::{current_termios_or_exit, termios_differences};
use crate::{CONTROLLED_STARTING, PtyLineReader, StdinTerminal, TerminalContext,
            TerminalModeManager, exit_with_failure, exit_with_success, generate_pty_test,
            report_line};
use std::time::Duration;

const CYCLE_COUNT: usize = 3;

generate_pty_test! {
    test_fn: test_restore_fidelity_over_cycles,
    controller: pty_controller_entry_point,
    controlled: pty_controlled_entry_point
}

fn pty_controller_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = PtyLineReader::new(&pty_pair);

    reader.wait_for(CONTROLLED_STARTING, Duration::from_secs(10));
    let verdict = reader.wait_for_success(Duration::from_secs(10));
    eprintln!("✅ Controller: {verdict}");

    let status = child.wait().expect("Failed to wait for child");
    assert!(status.success(), "Controlled process failed: {status:?}");
}

fn pty_controlled_entry_point() -> ! {
    let original = current_termios_or_exit();

    let context = TerminalContext::new();
    let manager = TerminalModeManager::new(StdinTerminal::new(), &context);

    for cycle in 1..=CYCLE_COUNT {
        if let Err(e) = manager.enter_raw_mode() {
            exit_with_failure(&format!("cycle {cycle}: enter_raw_mode failed: {e}"));
        }

        let raw = current_termios_or_exit();
        if termios_differences(&original, &raw).is_empty() {
            exit_with_failure(&format!("cycle {cycle}: raw mode changed nothing"));
        }

        if let Err(e) = manager.restore_mode() {
            exit_with_failure(&format!("cycle {cycle}: restore_mode failed: {e}"));
        }

        let restored = current_termios_or_exit();
        let differences = termios_differences(&original, &restored);
        if !differences.is_empty() {
            exit_with_failure(&format!(
                "cycle {cycle}: not restored: {}",
                differences.join(", ")
            ));
        }

        report_line(&format!("cycle {cycle} restored"));
    }

    // A second restore applies the same snapshot again.
    if let Err(e) = manager.restore_mode() {
        exit_with_failure(&format!("extra restore_mode failed: {e}"));
    }
    if !termios_differences(&original, &current_termios_or_exit()).is_empty() {
        exit_with_failure("extra restore changed the settings");
    }

    if context.restore_attempt_count() != CYCLE_COUNT + 1 {
        exit_with_failure(&format!(
            "expected {} restore attempts, got {}",
            CYCLE_COUNT + 1,
            context.restore_attempt_count()
        ));
    }

    exit_with_success(&format!("{CYCLE_COUNT} cycles restored exactly"));
}

generate_pty_test! {
    test_fn: test_pty_guard_restores_during_unwind,
    controller: pty_controller_entry_point,
    controlled: pty_controlled_guard_drop
}

fn pty_controlled_guard_drop() -> ! {
    let original = current_termios_or_exit();

    let context = TerminalContext::new();
    let manager = TerminalModeManager::new(StdinTerminal::new(), &context);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = manager.acquire().expect("Failed to acquire raw mode");
        panic!("main logic panicked while in raw mode");
    }));
    if outcome.is_ok() {
        exit_with_failure("panic was not propagated");
    }

    let differences = termios_differences(&original, &current_termios_or_exit());
    if !differences.is_empty() {
        exit_with_failure(&format!(
            "not restored after panic: {}",
            differences.join(", ")
        ));
    }

    exit_with_success("guard restored the terminal during unwinding");
}
