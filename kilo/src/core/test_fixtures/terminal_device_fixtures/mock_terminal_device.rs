// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ReadPolicy, TerminalAttributes, TerminalDevice};
use std::{cell::{Cell, RefCell},
          io};

/// A device independent model of the flags raw mode touches, one field per flag.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAttributes {
    pub echo: bool,
    pub canonical: bool,
    pub signals: bool,
    pub extended_input: bool,
    pub output_processing: bool,
    pub cr_to_nl: bool,
    pub break_interrupt: bool,
    pub parity_check: bool,
    pub strip_eighth_bit: bool,
    pub flow_control: bool,
    pub eight_bit_chars: bool,
    pub min_bytes: u8,
    pub timeout_deciseconds: u8,
}

impl MockAttributes {
    /// Typical cooked mode defaults of a freshly opened terminal.
    #[must_use]
    pub fn cooked() -> Self {
        Self {
            echo: true,
            canonical: true,
            signals: true,
            extended_input: true,
            output_processing: true,
            cr_to_nl: true,
            break_interrupt: true,
            parity_check: false,
            strip_eighth_bit: false,
            flow_control: true,
            eight_bit_chars: true,
            min_bytes: 1,
            timeout_deciseconds: 0,
        }
    }
}

impl Default for MockAttributes {
    fn default() -> Self { Self::cooked() }
}

impl TerminalAttributes for MockAttributes {
    fn to_raw_mode_config(&self, read_policy: ReadPolicy) -> Self {
        Self {
            echo: false,
            canonical: false,
            signals: false,
            extended_input: false,
            output_processing: false,
            cr_to_nl: false,
            break_interrupt: false,
            parity_check: false,
            strip_eighth_bit: false,
            flow_control: false,
            eight_bit_chars: true,
            min_bytes: read_policy.min_bytes,
            timeout_deciseconds: read_policy.timeout_deciseconds,
        }
    }
}

/// In memory [`TerminalDevice`] that records every apply attempt (including failed
/// ones) and can be scripted to fail.
///
/// - [`Self::with_failing_get()`] makes every query fail.
/// - [`Self::with_failing_apply()`] makes the n-th apply call (0 based) fail.
#[derive(Debug, Default)]
pub struct MockTerminalDevice {
    current: RefCell<MockAttributes>,
    apply_attempts: RefCell<Vec<MockAttributes>>,
    get_call_count: Cell<usize>,
    fail_get: bool,
    failing_apply_calls: Vec<usize>,
}

impl MockTerminalDevice {
    #[must_use]
    pub fn new(initial: MockAttributes) -> Self {
        Self {
            current: RefCell::new(initial),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    #[must_use]
    pub fn with_failing_apply(mut self, call_index: usize) -> Self {
        self.failing_apply_calls.push(call_index);
        self
    }

    pub fn current(&self) -> MockAttributes { self.current.borrow().clone() }

    pub fn apply_attempts(&self) -> Vec<MockAttributes> {
        self.apply_attempts.borrow().clone()
    }

    pub fn get_call_count(&self) -> usize { self.get_call_count.get() }
}

impl TerminalDevice for MockTerminalDevice {
    type Attributes = MockAttributes;

    fn get_attributes(&self) -> io::Result<MockAttributes> {
        self.get_call_count.set(self.get_call_count.get() + 1);
        if self.fail_get {
            return Err(io::Error::other("Inappropriate ioctl for device"));
        }
        Ok(self.current())
    }

    fn apply_attributes(&self, attributes: &MockAttributes) -> io::Result<()> {
        let call_index = self.apply_attempts.borrow().len();
        self.apply_attempts.borrow_mut().push(attributes.clone());
        if self.failing_apply_calls.contains(&call_index) {
            return Err(io::Error::other("Input/output error"));
        }
        *self.current.borrow_mut() = attributes.clone();
        Ok(())
    }
}
