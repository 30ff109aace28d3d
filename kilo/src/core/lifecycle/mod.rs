// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Session lifecycle: the explicit [`TerminalContext`], the [`FatalDeviceError`] that
//! every device failure turns into, and the [`LifecycleController`] that guarantees the
//! terminal is restored.

// Attach sources.
pub mod fatal_device_error;
pub mod lifecycle_controller;
pub mod terminal_context;

// Re-export.
pub use fatal_device_error::*;
pub use lifecycle_controller::*;
pub use terminal_context::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
