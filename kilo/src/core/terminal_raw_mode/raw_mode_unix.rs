// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of the terminal device using rustix's safe termios
//! API.

use super::{ReadPolicy, TerminalAttributes, TerminalDevice};
use rustix::termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                      OutputModes, SpecialCodeIndex, Termios};
use std::io::{self, Read};

/// The controlling terminal, reached through standard input.
///
/// Unlike a `/dev/tty` fallback, this deliberately fails with `ENOTTY` when stdin is
/// redirected, since the input loop reads its bytes from stdin.
#[derive(Debug)]
pub struct StdinTerminal {
    stdin: io::Stdin,
}

impl Default for StdinTerminal {
    fn default() -> Self { Self::new() }
}

impl StdinTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
        }
    }
}

impl TerminalDevice for StdinTerminal {
    type Attributes = Termios;

    fn get_attributes(&self) -> io::Result<Termios> {
        Ok(termios::tcgetattr(&self.stdin)?)
    }

    /// Uses [`OptionalActions::Flush`] (`TCSAFLUSH`): waits for pending output to be
    /// written, and discards input that hasn't been read yet.
    fn apply_attributes(&self, attributes: &Termios) -> io::Result<()> {
        Ok(termios::tcsetattr(
            &self.stdin,
            OptionalActions::Flush,
            attributes,
        )?)
    }
}

/// A single `read(2)` on the stdin file descriptor, bypassing the buffering in
/// [`io::Stdin`]. With the raw mode [`ReadPolicy`] in effect this returns `Ok(0)` when
/// the timeout elapses with no input.
impl Read for StdinTerminal {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(rustix::io::read(&self.stdin, buf)?)
    }
}

impl TerminalAttributes for Termios {
    /// Rather than [`Termios::make_raw()`] (which is `cfmakeraw` and sets `VMIN=1`,
    /// `VTIME=0`), only these flags are changed:
    ///
    /// | Field         | Cleared                                    | Set   |
    /// | :------------ | :----------------------------------------- | :---- |
    /// | input modes   | `BRKINT`, `ICRNL`, `INPCK`, `ISTRIP`, `IXON` |       |
    /// | output modes  | `OPOST`                                    |       |
    /// | control modes | `CSIZE`                                    | `CS8` |
    /// | local modes   | `ECHO`, `ICANON`, `IEXTEN`, `ISIG`         |       |
    ///
    /// `VMIN` and `VTIME` come from the [`ReadPolicy`].
    fn to_raw_mode_config(&self, read_policy: ReadPolicy) -> Self {
        let mut raw = self.clone();

        raw.input_modes.remove(
            InputModes::BRKINT
                | InputModes::ICRNL
                | InputModes::INPCK
                | InputModes::ISTRIP
                | InputModes::IXON,
        );
        raw.output_modes.remove(OutputModes::OPOST);
        raw.control_modes.remove(ControlModes::CSIZE);
        raw.control_modes.insert(ControlModes::CS8);
        raw.local_modes.remove(
            LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
        );

        raw.special_codes[SpecialCodeIndex::VMIN] = read_policy.min_bytes;
        raw.special_codes[SpecialCodeIndex::VTIME] = read_policy.timeout_deciseconds;

        raw
    }
}
