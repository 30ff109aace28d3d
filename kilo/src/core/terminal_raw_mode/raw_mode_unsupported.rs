// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Non Unix platforms. There is no termios here, so every device operation fails with
//! [`io::ErrorKind::Unsupported`], which surfaces as a fatal error from
//! [`TerminalModeManager::enter_raw_mode()`].
//!
//! [`TerminalModeManager::enter_raw_mode()`]: crate::TerminalModeManager::enter_raw_mode

use super::{ReadPolicy, TerminalAttributes, TerminalDevice};
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedAttributes;

impl TerminalAttributes for UnsupportedAttributes {
    fn to_raw_mode_config(&self, _read_policy: ReadPolicy) -> Self { *self }
}

#[derive(Debug, Default)]
pub struct StdinTerminal;

impl StdinTerminal {
    #[must_use]
    pub fn new() -> Self { Self }
}

fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "raw mode is only implemented for Unix terminals",
    )
}

impl TerminalDevice for StdinTerminal {
    type Attributes = UnsupportedAttributes;

    fn get_attributes(&self) -> io::Result<UnsupportedAttributes> { Err(unsupported()) }

    fn apply_attributes(&self, _attributes: &UnsupportedAttributes) -> io::Result<()> {
        Err(unsupported())
    }
}

impl Read for StdinTerminal {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> { Err(unsupported()) }
}
