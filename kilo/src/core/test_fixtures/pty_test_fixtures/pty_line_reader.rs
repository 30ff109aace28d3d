// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{FAILED_PREFIX, SUCCESS_PREFIX};
use std::{io::{BufRead, BufReader, Read, Write},
          time::{Duration, Instant}};

/// Line oriented reader for the controller side of a PTY test.
///
/// Lines written in raw mode end in `\r\n` (and cooked mode output is translated to
/// `\r\n` too), so every line is trimmed before it is handed out.
#[allow(missing_debug_implementations)]
pub struct PtyLineReader {
    buf_reader: BufReader<Box<dyn Read + Send>>,
}

impl PtyLineReader {
    /// # Panics
    ///
    /// Panics if the reader can't be cloned from the controller side of the PTY.
    #[must_use]
    pub fn new(pty_pair: &portable_pty::PtyPair) -> Self {
        let reader = pty_pair
            .master
            .try_clone_reader()
            .expect("Failed to get reader");
        Self {
            buf_reader: BufReader::new(reader),
        }
    }

    /// Next trimmed line, or `None` at EOF (the controlled process is gone).
    ///
    /// # Panics
    ///
    /// Panics on a read error other than `WouldBlock`.
    pub fn next_line(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.buf_reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let trimmed = line.trim().to_string();
                    eprintln!("  ← Controlled output: {trimmed}");
                    return Some(trimmed);
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    std::thread::sleep(Duration::from_millis(10));
                }
                // Linux reports EIO on the controller side once the controlled side
                // closes.
                Err(e) if e.raw_os_error() == Some(5) => return None,
                Err(e) => panic!("Read error: {e}"),
            }
        }
    }

    /// Skip lines until one contains `marker`.
    ///
    /// # Panics
    ///
    /// Panics if a `FAILED:` line shows up, or EOF / `timeout` is hit first.
    pub fn wait_for(&mut self, marker: &str, timeout: Duration) -> String {
        let start = Instant::now();
        while start.elapsed() < timeout {
            let Some(line) = self.next_line() else {
                panic!("EOF while waiting for {marker:?}");
            };
            assert!(!line.contains(FAILED_PREFIX), "Test failed: {line}");
            if line.contains(marker) {
                return line;
            }
        }
        panic!("Timed out waiting for {marker:?}");
    }

    /// Wait for the `SUCCESS:` verdict line.
    ///
    /// # Panics
    ///
    /// See [`Self::wait_for()`].
    pub fn wait_for_success(&mut self, timeout: Duration) -> String {
        self.wait_for(SUCCESS_PREFIX, timeout)
    }
}

/// Controlled side: print a verdict line and flush, since the controller reads line by
/// line.
///
/// # Panics
///
/// Panics if stdout can't be flushed.
pub fn report_line(line: &str) {
    // `\r\n` so the line is intact whether or not OPOST is on.
    print!("{line}\r\n");
    std::io::stdout().flush().expect("Failed to flush");
}

/// Controlled side: report a failure and exit with a non zero status.
pub fn exit_with_failure(reason: &str) -> ! {
    report_line(&format!("{FAILED_PREFIX} {reason}"));
    std::process::exit(1);
}

/// Controlled side: report success and exit with status `0`.
pub fn exit_with_success(summary: &str) -> ! {
    report_line(&format!("{SUCCESS_PREFIX} {summary}"));
    std::process::exit(0);
}
