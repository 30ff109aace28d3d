// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminalModeSnapshot;
use std::{cell::{Cell, OnceCell},
          fmt::{Debug, Formatter}};

/// Holds the single [`TerminalModeSnapshot`] for the life of the process.
///
/// This is an explicit value (not a `static`) created by the [`LifecycleController`]
/// and passed by reference to the [`TerminalModeManager`]. The snapshot can be set at
/// most once and can't be replaced afterwards. Everything runs on one thread, so plain
/// [`Cell`]s are enough.
///
/// [`LifecycleController`]: crate::LifecycleController
/// [`TerminalModeManager`]: crate::TerminalModeManager
pub struct TerminalContext<A> {
    snapshot: OnceCell<TerminalModeSnapshot<A>>,
    restore_attempt_count: Cell<usize>,
}

impl<A> Default for TerminalContext<A> {
    fn default() -> Self { Self::new() }
}

impl<A> TerminalContext<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: OnceCell::new(),
            restore_attempt_count: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Option<&TerminalModeSnapshot<A>> { self.snapshot.get() }

    /// Returns the existing snapshot, or runs `capture` to create it. A failed capture
    /// leaves the context empty.
    ///
    /// # Errors
    ///
    /// Returns whatever `capture` returns.
    pub fn get_or_try_capture<E>(
        &self,
        capture: impl FnOnce() -> Result<TerminalModeSnapshot<A>, E>,
    ) -> Result<&TerminalModeSnapshot<A>, E> {
        if let Some(snapshot) = self.snapshot.get() {
            return Ok(snapshot);
        }
        let snapshot = capture()?;
        tracing::debug!(message = "Original terminal settings captured");
        Ok(self.snapshot.get_or_init(move || snapshot))
    }

    pub fn record_restore_attempt(&self) {
        self.restore_attempt_count
            .set(self.restore_attempt_count.get() + 1);
    }

    /// How many times the snapshot has been applied back to the device.
    pub fn restore_attempt_count(&self) -> usize { self.restore_attempt_count.get() }
}

impl<A> Debug for TerminalContext<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalContext")
            .field("has_snapshot", &self.snapshot.get().is_some())
            .field("restore_attempt_count", &self.restore_attempt_count.get())
            .finish()
    }
}
