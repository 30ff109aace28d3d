// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          io};

/// The OS level operation that failed. Its [`Display`] output is the name of the
/// underlying system call, which is what ends up in front of the OS error description in
/// the diagnostic printed before the process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOperation {
    /// Query the terminal attributes (`tcgetattr(3)`).
    Tcgetattr,
    /// Apply terminal attributes with flush-then-apply semantics (`tcsetattr(3)` with
    /// `TCSAFLUSH`).
    Tcsetattr,
    /// Read a byte from the terminal (`read(2)`).
    Read,
    /// Write a report line to the output stream (`write(2)`).
    Write,
}

impl Display for DeviceOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeviceOperation::Tcgetattr => "tcgetattr",
            DeviceOperation::Tcsetattr => "tcsetattr",
            DeviceOperation::Read => "read",
            DeviceOperation::Write => "write",
        };
        f.write_str(name)
    }
}

/// An unrecoverable failure of an OS call on the terminal device.
///
/// This is never handled locally. It is propagated up to the
/// [`LifecycleController`], which restores the terminal and then hands it to the binary's
/// `main()` to be printed as a [`miette`] report (exit status `1`).
///
/// When restoring the terminal also fails after a primary failure, the restore failure
/// is attached as a [related] diagnostic so that both are reported.
///
/// [`LifecycleController`]: crate::LifecycleController
/// [related]: miette::Diagnostic::related
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{operation}: {os_error}")]
#[diagnostic(code(r3bl_kilo::fatal_device_error))]
pub struct FatalDeviceError {
    pub operation: DeviceOperation,
    /// The OS provided error. This is not a `#[source]` since its description is
    /// already part of the message.
    pub os_error: io::Error,
    #[help]
    pub help: Option<&'static str>,
    #[related]
    pub related: Vec<FatalDeviceError>,
}

impl FatalDeviceError {
    #[must_use]
    pub fn new(operation: DeviceOperation, os_error: io::Error) -> Self {
        let help = match operation {
            DeviceOperation::Tcgetattr => Some(
                "Standard input must be an interactive terminal, not a pipe or a file",
            ),
            DeviceOperation::Tcsetattr => Some(
                "If the terminal is left misconfigured, run `stty sane` to fix it",
            ),
            DeviceOperation::Read | DeviceOperation::Write => None,
        };
        Self {
            operation,
            os_error,
            help,
            related: vec![],
        }
    }

    /// Attach a secondary failure (usually a failed restore) to this one.
    #[must_use]
    pub fn with_related(mut self, other: FatalDeviceError) -> Self {
        self.related.push(other);
        self
    }
}
