// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core raw mode functionality and RAII guard.
//!
//! This module provides:
//! - [`TerminalModeManager`], which moves a [`TerminalDevice`] between its original
//!   settings and raw mode
//! - [`RawModeGuard`], the RAII wrapper that restores the original settings

use super::{ReadPolicy, TerminalDevice, TerminalModeSnapshot};
use crate::{DeviceOperation, FatalDeviceError, TerminalContext};
use std::fmt::{Debug, Formatter};

/// Moves the terminal between its original ("cooked") settings and raw mode.
///
/// The [`TerminalContext`] that holds the snapshot of the original settings is owned by
/// the caller (the [`LifecycleController`]) and borrowed here, so the same snapshot is
/// reachable from the error path that ends up restoring the terminal.
///
/// [`LifecycleController`]: crate::LifecycleController
pub struct TerminalModeManager<'ctx, D: TerminalDevice> {
    device: D,
    context: &'ctx TerminalContext<D::Attributes>,
    read_policy: ReadPolicy,
}

impl<'ctx, D: TerminalDevice> TerminalModeManager<'ctx, D> {
    pub fn new(device: D, context: &'ctx TerminalContext<D::Attributes>) -> Self {
        Self {
            device,
            context,
            read_policy: ReadPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_read_policy(mut self, read_policy: ReadPolicy) -> Self {
        self.read_policy = read_policy;
        self
    }

    pub fn device(&self) -> &D { &self.device }

    /// Enter raw mode.
    ///
    /// 1. Capture the [`TerminalModeSnapshot`], only if this is the first time.
    /// 2. Derive the [`RawModeConfig`] from the snapshot.
    /// 3. Apply it with flush-then-apply semantics.
    ///
    /// If step 3 fails, the snapshot is applied back before the error is returned, so
    /// that no partial raw mode configuration is left behind.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Tcgetattr`] error if the snapshot can't be captured,
    /// or a [`DeviceOperation::Tcsetattr`] error if raw mode can't be applied.
    ///
    /// [`RawModeConfig`]: super::RawModeConfig
    pub fn enter_raw_mode(&self) -> Result<(), FatalDeviceError> {
        let snapshot = self
            .context
            .get_or_try_capture(|| TerminalModeSnapshot::capture(&self.device))?;

        let raw_mode_config = snapshot.derive_raw_mode_config(self.read_policy);

        if let Err(os_error) =
            self.device.apply_attributes(raw_mode_config.attributes())
        {
            let error = FatalDeviceError::new(DeviceOperation::Tcsetattr, os_error);
            tracing::error!(message = "Failed to enter raw mode", %error);
            return Err(match self.restore_mode() {
                Ok(()) => error,
                Err(restore_error) => error.with_related(restore_error),
            });
        }

        tracing::debug!(
            message = "Raw mode entered",
            read_policy = ?raw_mode_config.read_policy()
        );
        Ok(())
    }

    /// Apply the original settings back to the device, with the same flush-then-apply
    /// semantics. Calling this repeatedly applies the same snapshot each time. It is a
    /// no-op if no snapshot was ever captured.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Tcsetattr`] error if the settings can't be applied.
    pub fn restore_mode(&self) -> Result<(), FatalDeviceError> {
        let Some(snapshot) = self.context.snapshot() else {
            tracing::debug!(message = "No snapshot captured, nothing to restore");
            return Ok(());
        };

        self.context.record_restore_attempt();

        self.device
            .apply_attributes(snapshot.attributes())
            .map_err(|it| FatalDeviceError::new(DeviceOperation::Tcsetattr, it))?;

        tracing::debug!(message = "Original terminal settings restored");
        Ok(())
    }

    /// Enter raw mode and return a guard that restores the original settings when it is
    /// [released](RawModeGuard::release) or dropped.
    ///
    /// # Errors
    ///
    /// See [`Self::enter_raw_mode()`].
    pub fn acquire(&self) -> Result<RawModeGuard<'_, 'ctx, D>, FatalDeviceError> {
        self.enter_raw_mode()?;
        Ok(RawModeGuard {
            manager: self,
            released: false,
        })
    }
}

impl<D: TerminalDevice> Debug for TerminalModeManager<'_, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalModeManager")
            .field("read_policy", &self.read_policy)
            .finish_non_exhaustive()
    }
}

/// RAII guard for raw mode.
///
/// Prefer [`Self::release()`] on the normal path, since it reports a failed restore.
/// [`Drop`] covers early returns and panics, where the restore is best-effort and a
/// failure can only be logged.
pub struct RawModeGuard<'m, 'ctx, D: TerminalDevice> {
    manager: &'m TerminalModeManager<'ctx, D>,
    released: bool,
}

impl<D: TerminalDevice> RawModeGuard<'_, '_, D> {
    /// Restore the original settings now.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Tcsetattr`] error if the settings can't be applied.
    pub fn release(mut self) -> Result<(), FatalDeviceError> {
        self.released = true;
        self.manager.restore_mode()
    }
}

impl<D: TerminalDevice> Drop for RawModeGuard<'_, '_, D> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(error) = self.manager.restore_mode() {
            tracing::error!(message = "Failed to restore terminal on drop", %error);
        }
    }
}

impl<D: TerminalDevice> Debug for RawModeGuard<'_, '_, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard")
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}
