// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ByteReport, CRLF, QUIT_BYTE};
use crate::{DeviceOperation, FatalDeviceError};
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The result of asking the input device for one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Byte(u8),
    /// The read timeout elapsed with nothing to read.
    Timeout,
    /// The read was interrupted or would block. Try again.
    Retry,
}

/// Reads one byte at a time from `reader` and writes a [`ByteReport`] line for each byte
/// to `writer`, until [`QUIT_BYTE`] arrives or a read fails.
///
/// This expects raw mode to already be in effect on the device behind `reader` (see
/// [`crate::LifecycleController::run()`]), so that a read returns after at most the
/// raw mode timeout, instead of blocking until a whole line is typed.
///
/// ```text
///            ┌──── Timeout / Retry / non-quit byte ───┐
///            ▼                                        │
///     ┌─────────────┐                                 │
///     │   Running   ├─────────────────────────────────┘
///     └──────┬──────┘
///            │ QUIT_BYTE (Ok) or read failure (Err)
///            ▼
///     ┌─────────────┐
///     │ Terminated  │
///     └─────────────┘
/// ```
#[derive(Debug)]
pub struct InputLoopController<R, W> {
    reader: R,
    writer: W,
    state: LoopState,
}

impl<R: Read, W: Write> InputLoopController<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState { self.state }

    pub fn into_inner(self) -> (R, W) { (self.reader, self.writer) }

    /// Request a single byte.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Read`] error for any read failure other than
    /// [`io::ErrorKind::Interrupted`] and [`io::ErrorKind::WouldBlock`].
    pub fn read_one(&mut self) -> Result<ReadOutcome, FatalDeviceError> {
        let mut buffer = [0_u8; 1];
        match self.reader.read(&mut buffer) {
            Ok(0) => Ok(ReadOutcome::Timeout),
            Ok(_) => Ok(ReadOutcome::Byte(buffer[0])),
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) =>
            {
                Ok(ReadOutcome::Retry)
            }
            Err(error) => Err(FatalDeviceError::new(DeviceOperation::Read, error)),
        }
    }

    /// Run one iteration of the loop. Once [`LoopState::Terminated`] is reached, no
    /// further reads are issued.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Read`] error if the read fails, or a
    /// [`DeviceOperation::Write`] error if the report line can't be written. Either way
    /// the loop is terminated.
    pub fn step(&mut self) -> Result<LoopState, FatalDeviceError> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let result = self.step_running();
        if result.is_err() {
            self.state = LoopState::Terminated;
        }
        result
    }

    fn step_running(&mut self) -> Result<LoopState, FatalDeviceError> {
        let byte = match self.read_one()? {
            ReadOutcome::Byte(byte) => byte,
            ReadOutcome::Timeout => {
                tracing::trace!(message = "Read timed out with no input");
                return Ok(self.state);
            }
            ReadOutcome::Retry => {
                tracing::trace!(message = "Read interrupted, retrying");
                return Ok(self.state);
            }
        };

        let report = ByteReport::from(byte);
        tracing::debug!(message = "Byte read", byte, class = ?report.class);
        self.write_report(report)
            .map_err(|it| FatalDeviceError::new(DeviceOperation::Write, it))?;

        if byte == QUIT_BYTE {
            tracing::debug!(message = "Quit byte read, stopping input loop");
            self.state = LoopState::Terminated;
        }

        Ok(self.state)
    }

    fn write_report(&mut self, report: ByteReport) -> io::Result<()> {
        write!(self.writer, "{report}{CRLF}")?;
        self.writer.flush()
    }

    /// Loop until [`LoopState::Terminated`].
    ///
    /// # Errors
    ///
    /// See [`Self::step()`].
    pub fn run(&mut self) -> Result<(), FatalDeviceError> {
        while self.step()? == LoopState::Running {}
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CONTROL_C, ScriptedRead, ScriptedReader};
    use pretty_assertions::assert_eq;

    fn output_of(writer: Vec<u8>) -> String { String::from_utf8(writer).unwrap() }

    #[test]
    fn test_terminates_on_q_after_reporting_each_byte() {
        let reader = ScriptedReader::from_bytes(&[0x61, 0x62, 0x71]);
        let mut controller = InputLoopController::new(reader, Vec::new());

        controller.run().unwrap();

        assert_eq!(controller.state(), LoopState::Terminated);
        let (reader, writer) = controller.into_inner();
        assert_eq!(
            output_of(writer),
            "97 ('a')\r\n98 ('b')\r\n113 ('q')\r\n"
        );
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_bytes_after_q_are_not_read() {
        let reader = ScriptedReader::from_bytes(b"qxyz");
        let mut controller = InputLoopController::new(reader, Vec::new());

        controller.run().unwrap();

        let (reader, writer) = controller.into_inner();
        assert_eq!(output_of(writer), "113 ('q')\r\n");
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn test_control_byte_reports_decimal_only() {
        let reader = ScriptedReader::from_bytes(&[CONTROL_C, b'q']);
        let mut controller = InputLoopController::new(reader, Vec::new());

        controller.run().unwrap();

        let (_, writer) = controller.into_inner();
        assert_eq!(output_of(writer), "3\r\n113 ('q')\r\n");
    }

    #[test]
    fn test_timeouts_and_interrupts_are_noops() {
        let reader = ScriptedReader::new(vec![
            ScriptedRead::Timeout,
            ScriptedRead::Error(io::ErrorKind::Interrupted),
            ScriptedRead::Byte(b'a'),
            ScriptedRead::Error(io::ErrorKind::WouldBlock),
            ScriptedRead::Timeout,
            ScriptedRead::Byte(b'q'),
        ]);
        let mut controller = InputLoopController::new(reader, Vec::new());

        assert_eq!(controller.step().unwrap(), LoopState::Running);
        assert_eq!(controller.step().unwrap(), LoopState::Running);
        controller.run().unwrap();

        let (_, writer) = controller.into_inner();
        assert_eq!(output_of(writer), "97 ('a')\r\n113 ('q')\r\n");
    }

    #[test]
    fn test_read_failure_is_fatal_and_terminates() {
        let reader = ScriptedReader::new(vec![
            ScriptedRead::Byte(b'a'),
            ScriptedRead::Error(io::ErrorKind::BrokenPipe),
            ScriptedRead::Byte(b'q'),
        ]);
        let mut controller = InputLoopController::new(reader, Vec::new());

        let error = controller.run().unwrap_err();

        assert_eq!(error.operation, DeviceOperation::Read);
        assert_eq!(controller.state(), LoopState::Terminated);
        // Terminated is final: no more reads.
        assert_eq!(controller.step().unwrap(), LoopState::Terminated);
        let (reader, writer) = controller.into_inner();
        assert_eq!(reader.remaining(), 1);
        assert_eq!(output_of(writer), "97 ('a')\r\n");
    }

    #[test]
    fn test_read_one_outcomes() {
        let reader = ScriptedReader::new(vec![
            ScriptedRead::Byte(b'z'),
            ScriptedRead::Timeout,
            ScriptedRead::Error(io::ErrorKind::Interrupted),
        ]);
        let mut controller = InputLoopController::new(reader, Vec::new());

        assert_eq!(controller.read_one().unwrap(), ReadOutcome::Byte(b'z'));
        assert_eq!(controller.read_one().unwrap(), ReadOutcome::Timeout);
        assert_eq!(controller.read_one().unwrap(), ReadOutcome::Retry);
    }

    #[test]
    fn test_write_failure_is_fatal() {
        struct BrokenWriter;
        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let reader = ScriptedReader::from_bytes(b"a");
        let mut controller = InputLoopController::new(reader, BrokenWriter);

        let error = controller.run().unwrap_err();
        assert_eq!(error.operation, DeviceOperation::Write);
        assert_eq!(controller.state(), LoopState::Terminated);
    }
}
