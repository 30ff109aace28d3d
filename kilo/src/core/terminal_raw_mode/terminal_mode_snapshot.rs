// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ReadPolicy, TerminalAttributes, TerminalDevice};
use crate::{DeviceOperation, FatalDeviceError};
use std::fmt::{Debug, Formatter};

/// The terminal's original ("cooked") attributes, captured before raw mode is entered
/// for the first time. Immutable once captured; applied back verbatim on restore.
pub struct TerminalModeSnapshot<A> {
    attributes: A,
}

impl<A: TerminalAttributes> TerminalModeSnapshot<A> {
    /// Query the device for its current attributes.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceOperation::Tcgetattr`] error if the query fails.
    pub fn capture<D>(device: &D) -> Result<Self, FatalDeviceError>
    where
        D: TerminalDevice<Attributes = A>,
    {
        let attributes = device
            .get_attributes()
            .map_err(|it| FatalDeviceError::new(DeviceOperation::Tcgetattr, it))?;
        Ok(Self { attributes })
    }

    pub fn attributes(&self) -> &A { &self.attributes }

    /// Computed fresh every time raw mode is (re-)entered.
    #[must_use]
    pub fn derive_raw_mode_config(&self, read_policy: ReadPolicy) -> RawModeConfig<A> {
        RawModeConfig {
            attributes: self.attributes.to_raw_mode_config(read_policy),
            read_policy,
        }
    }
}

impl<A> Debug for TerminalModeSnapshot<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalModeSnapshot").finish_non_exhaustive()
    }
}

/// The attributes applied to the device to enter raw mode. Not persisted.
pub struct RawModeConfig<A> {
    attributes: A,
    read_policy: ReadPolicy,
}

impl<A> RawModeConfig<A> {
    pub fn attributes(&self) -> &A { &self.attributes }

    pub fn read_policy(&self) -> ReadPolicy { self.read_policy }
}

impl<A> Debug for RawModeConfig<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeConfig")
            .field("read_policy", &self.read_policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockAttributes, MockTerminalDevice};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capture_reads_current_attributes() {
        let device = MockTerminalDevice::default();
        let snapshot = TerminalModeSnapshot::capture(&device).unwrap();
        assert_eq!(snapshot.attributes(), &MockAttributes::cooked());
        assert_eq!(device.get_call_count(), 1);
    }

    #[test]
    fn test_capture_failure_is_tcgetattr_error() {
        let device = MockTerminalDevice::default().with_failing_get();
        let error = TerminalModeSnapshot::capture(&device).unwrap_err();
        assert_eq!(error.operation, DeviceOperation::Tcgetattr);
    }

    #[test]
    fn test_raw_mode_config_is_derived_from_snapshot() {
        let device = MockTerminalDevice::default();
        let snapshot = TerminalModeSnapshot::capture(&device).unwrap();
        let config = snapshot.derive_raw_mode_config(ReadPolicy::default());

        assert_eq!(config.read_policy(), ReadPolicy::default());
        assert_eq!(
            config.attributes(),
            &MockAttributes::cooked().to_raw_mode_config(ReadPolicy::default())
        );
        // The snapshot itself is untouched.
        assert_eq!(snapshot.attributes(), &MockAttributes::cooked());
    }
}
