// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The seam between the mode manager and the OS. The production implementation is
//! [`StdinTerminal`]; tests use [`MockTerminalDevice`].
//!
//! [`MockTerminalDevice`]: crate::MockTerminalDevice
//! [`StdinTerminal`]: crate::StdinTerminal

use super::ReadPolicy;
use std::io;

/// The terminal configuration as held by the device (on Unix, a `termios` struct).
pub trait TerminalAttributes: Clone {
    /// Derive the raw mode configuration from `self` (the original settings). Only the
    /// raw mode related fields change, everything else is carried over untouched.
    #[must_use]
    fn to_raw_mode_config(&self, read_policy: ReadPolicy) -> Self;
}

pub trait TerminalDevice {
    type Attributes: TerminalAttributes;

    /// Query the current attributes of the device.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the device can't be queried (eg: it is not a tty).
    fn get_attributes(&self) -> io::Result<Self::Attributes>;

    /// Apply `attributes` to the device. Pending output is written out first, and
    /// unread pending input is discarded.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the attributes can't be applied.
    fn apply_attributes(&self, attributes: &Self::Attributes) -> io::Result<()>;
}

impl<T: TerminalDevice> TerminalDevice for &T {
    type Attributes = T::Attributes;

    fn get_attributes(&self) -> io::Result<Self::Attributes> { (**self).get_attributes() }

    fn apply_attributes(&self, attributes: &Self::Attributes) -> io::Result<()> {
        (**self).apply_attributes(attributes)
    }
}
