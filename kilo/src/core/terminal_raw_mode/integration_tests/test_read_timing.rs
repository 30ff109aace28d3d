// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read behavior in raw mode on a real PTY: the bounded timeout, immediate delivery of
//! pending bytes, and control bytes arriving as plain bytes instead of signals.

use crate::{CONTROL_C, CONTROLLED_READY, CONTROLLED_STARTING, PtyLineReader,
            StdinTerminal, TerminalContext, TerminalModeManager, exit_with_failure,
            exit_with_success, generate_pty_test, report_line};
use std::{io::{Read, Write},
          time::{Duration, Instant}};

/// Well above the 100ms `VTIME`, to leave room for a loaded machine.
const TIMEOUT_UPPER_BOUND: Duration = Duration::from_millis(1000);

/// A byte that is already queued must come back without waiting for `VTIME`.
const IMMEDIATE_UPPER_BOUND: Duration = Duration::from_millis(50);

const AWAITING_INPUT: &str = "AWAITING_INPUT";

/// Read until a byte arrives, or give up after `deadline`.
fn read_byte_before(terminal: &mut StdinTerminal, deadline: Duration) -> Option<u8> {
    let start = Instant::now();
    let mut buffer = [0_u8; 1];
    while start.elapsed() < deadline {
        match terminal.read(&mut buffer) {
            Ok(1) => return Some(buffer[0]),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => exit_with_failure(&format!("read failed: {e}")),
        }
    }
    None
}

/// Wait for the controlled side to be ready, then send `input`.
fn send_when_awaiting(
    reader: &mut PtyLineReader,
    pty_pair: &portable_pty::PtyPair,
    input: &[u8],
) {
    reader.wait_for(CONTROLLED_STARTING, Duration::from_secs(10));
    reader.wait_for(CONTROLLED_READY, Duration::from_secs(10));
    reader.wait_for(AWAITING_INPUT, Duration::from_secs(10));

    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");
    writer.write_all(input).expect("Failed to write input");
    writer.flush().expect("Failed to flush input");
    eprintln!("📝 Controller: sent {input:?}");
}

generate_pty_test! {
    test_fn: test_read_timeout_and_immediate_delivery,
    controller: pty_controller_timing,
    controlled: pty_controlled_timing
}

fn pty_controller_timing(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = PtyLineReader::new(&pty_pair);
    send_when_awaiting(&mut reader, &pty_pair, b"yz");

    let verdict = reader.wait_for_success(Duration::from_secs(10));
    eprintln!("✅ Controller: {verdict}");

    let status = child.wait().expect("Failed to wait for child");
    assert!(status.success(), "Controlled process failed: {status:?}");
}

fn pty_controlled_timing() -> ! {
    let context = TerminalContext::new();
    let manager = TerminalModeManager::new(StdinTerminal::new(), &context);
    let guard = match manager.acquire() {
        Ok(it) => it,
        Err(e) => exit_with_failure(&format!("acquire failed: {e}")),
    };
    report_line(CONTROLLED_READY);

    let mut terminal = StdinTerminal::new();

    // Nothing has been sent yet, so this read must time out with 0 bytes.
    let mut buffer = [0_u8; 1];
    let start = Instant::now();
    let outcome = terminal.read(&mut buffer);
    let elapsed = start.elapsed();
    match outcome {
        Ok(0) => {}
        Ok(n) => exit_with_failure(&format!("expected a timeout, read {n} bytes")),
        Err(e) => exit_with_failure(&format!("read failed: {e}")),
    }
    if elapsed > TIMEOUT_UPPER_BOUND {
        exit_with_failure(&format!("timeout read took {elapsed:?}"));
    }

    report_line(AWAITING_INPUT);

    let Some(first) = read_byte_before(&mut terminal, Duration::from_secs(5)) else {
        exit_with_failure("no input arrived");
    };

    // Both bytes were sent together, so the second one is already queued.
    let start = Instant::now();
    let second = terminal.read(&mut buffer);
    let elapsed = start.elapsed();

    if let Err(e) = guard.release() {
        exit_with_failure(&format!("release failed: {e}"));
    }

    if first != b'y' {
        exit_with_failure(&format!("expected 'y', got {first}"));
    }
    match second {
        Ok(1) if buffer[0] == b'z' => {}
        other => exit_with_failure(&format!("expected 'z', got {other:?} {buffer:?}")),
    }
    if elapsed > IMMEDIATE_UPPER_BOUND {
        exit_with_failure(&format!("queued byte took {elapsed:?}"));
    }

    exit_with_success("timeout bounded, queued bytes delivered immediately");
}

generate_pty_test! {
    test_fn: test_control_byte_is_not_a_signal,
    controller: pty_controller_control_byte,
    controlled: pty_controlled_control_byte
}

fn pty_controller_control_byte(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = PtyLineReader::new(&pty_pair);
    send_when_awaiting(&mut reader, &pty_pair, &[CONTROL_C]);

    let verdict = reader.wait_for_success(Duration::from_secs(10));
    eprintln!("✅ Controller: {verdict}");

    // With ISIG off the child is not killed by SIGINT, and exits normally.
    let status = child.wait().expect("Failed to wait for child");
    assert!(status.success(), "Controlled process failed: {status:?}");
}

fn pty_controlled_control_byte() -> ! {
    let context = TerminalContext::new();
    let manager = TerminalModeManager::new(StdinTerminal::new(), &context);
    let guard = match manager.acquire() {
        Ok(it) => it,
        Err(e) => exit_with_failure(&format!("acquire failed: {e}")),
    };
    report_line(CONTROLLED_READY);
    report_line(AWAITING_INPUT);

    let mut terminal = StdinTerminal::new();
    let byte = read_byte_before(&mut terminal, Duration::from_secs(5));

    if let Err(e) = guard.release() {
        exit_with_failure(&format!("release failed: {e}"));
    }

    match byte {
        Some(CONTROL_C) => exit_with_success("Ctrl+C arrived as byte 3"),
        other => exit_with_failure(&format!("expected byte 3, got {other:?}")),
    }
}
