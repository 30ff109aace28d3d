// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FatalDeviceError, InputLoopController, ReadPolicy, StdinTerminal,
            TerminalAttributes, TerminalContext, TerminalDevice, TerminalModeManager};
use std::io;

/// Sequences a session: enter raw mode, run the main logic, restore the original
/// settings. Owns the [`TerminalContext`], so there is exactly one snapshot per
/// controller.
///
/// Restoration happens exactly once on every path out of [`Self::run()`]:
///
/// | Path                              | Restore                                  |
/// | :-------------------------------- | :--------------------------------------- |
/// | main logic returns `Ok`           | explicit release                         |
/// | main logic returns `Err`          | explicit release, error is propagated    |
/// | main logic panics                 | [`Drop`] of the [`RawModeGuard`]         |
/// | applying raw mode fails           | rollback inside enter                    |
/// | capturing the snapshot fails      | none (nothing was changed)               |
///
/// [`RawModeGuard`]: crate::RawModeGuard
#[derive(Debug)]
pub struct LifecycleController<A> {
    context: TerminalContext<A>,
    read_policy: ReadPolicy,
}

impl<A: TerminalAttributes> Default for LifecycleController<A> {
    fn default() -> Self { Self::new() }
}

impl<A: TerminalAttributes> LifecycleController<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            context: TerminalContext::new(),
            read_policy: ReadPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    pub fn context(&self) -> &TerminalContext<A> { &self.context }

    /// Run `main_logic` with `device` in raw mode.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: entering raw mode, the main logic, or restoring.
    /// If both the main logic and the restore fail, the restore failure is attached as a
    /// related error so neither is lost.
    pub fn run<D, T>(
        &self,
        device: D,
        main_logic: impl FnOnce() -> Result<T, FatalDeviceError>,
    ) -> Result<T, FatalDeviceError>
    where
        D: TerminalDevice<Attributes = A>,
    {
        let manager = TerminalModeManager::new(device, &self.context)
            .with_read_policy(self.read_policy);
        let guard = manager.acquire()?;

        let outcome = main_logic();
        let restore_outcome = guard.release();

        match (outcome, restore_outcome) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(restore_error)) => Err(restore_error),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(restore_error)) => Err(error.with_related(restore_error)),
        }
    }
}

/// The kilo session on the controlling terminal: raw mode on stdin, bytes from stdin,
/// reports to stdout, until `q` is read.
///
/// # Errors
///
/// See [`LifecycleController::run()`].
pub fn run_stdin_session() -> Result<(), FatalDeviceError> {
    let lifecycle = LifecycleController::new();
    lifecycle.run(StdinTerminal::new(), || {
        InputLoopController::new(StdinTerminal::new(), io::stdout().lock()).run()
    })
}
