// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Checks the exact termios flags that raw mode sets on a real PTY.

use super::current_termios_or_exit;
use crate::{CONTROLLED_STARTING, PtyLineReader, StdinTerminal, TerminalContext,
            TerminalModeManager, VMIN_RAW_MODE, VTIME_RAW_MODE, exit_with_failure,
            exit_with_success, generate_pty_test};
use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes,
                      SpecialCodeIndex};
use std::time::Duration;

generate_pty_test! {
    test_fn: test_raw_mode_flags_on_pty,
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
    let guard = match manager.acquire() {
        Ok(it) => it,
        Err(e) => exit_with_failure(&format!("acquire failed: {e}")),
    };

    let raw = current_termios_or_exit();

    // Collect problems first, so the terminal is restored before the verdict.
    let mut problems: Vec<&str> = vec![];
    let mut check = |ok: bool, problem: &'static str| {
        if !ok {
            problems.push(problem);
        }
    };

    for (flag, name) in [
        (InputModes::BRKINT, "BRKINT still set"),
        (InputModes::ICRNL, "ICRNL still set"),
        (InputModes::INPCK, "INPCK still set"),
        (InputModes::ISTRIP, "ISTRIP still set"),
        (InputModes::IXON, "IXON still set"),
    ] {
        check(!raw.input_modes.contains(flag), name);
    }
    check(!raw.output_modes.contains(OutputModes::OPOST), "OPOST still set");
    check(
        raw.control_modes & ControlModes::CSIZE == ControlModes::CS8,
        "character size is not CS8",
    );
    for (flag, name) in [
        (LocalModes::ECHO, "ECHO still set"),
        (LocalModes::ICANON, "ICANON still set"),
        (LocalModes::IEXTEN, "IEXTEN still set"),
        (LocalModes::ISIG, "ISIG still set"),
    ] {
        check(!raw.local_modes.contains(flag), name);
    }
    check(raw.special_codes[SpecialCodeIndex::VMIN] == VMIN_RAW_MODE, "VMIN is not 0");
    check(raw.special_codes[SpecialCodeIndex::VTIME] == VTIME_RAW_MODE, "VTIME is not 1");

    // Flags outside the raw mode set are carried over from the snapshot.
    check(
        raw.special_codes[SpecialCodeIndex::VINTR]
            == original.special_codes[SpecialCodeIndex::VINTR],
        "VINTR changed",
    );
    check(
        raw.control_modes.contains(ControlModes::CREAD)
            == original.control_modes.contains(ControlModes::CREAD),
        "CREAD changed",
    );

    if let Err(e) = guard.release() {
        exit_with_failure(&format!("release failed: {e}"));
    }

    if problems.is_empty() {
        exit_with_success("all raw mode flags verified");
    }
    exit_with_failure(&problems.join(", "));
}
