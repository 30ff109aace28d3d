// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for tests that need a real terminal. See [`generate_pty_test!`].
//!
//! [`generate_pty_test!`]: crate::generate_pty_test

// Attach sources.
pub mod generate_pty_test;
#[cfg(test)]
pub mod pty_line_reader;

// Re-export.
#[cfg(test)]
pub use pty_line_reader::*;

/// Set in the environment of the controlled process.
pub const PTY_CONTROLLED_ENV_VAR: &str = "R3BL_KILO_PTY_TEST_CONTROLLED";

/// First line printed by the controlled process.
pub const CONTROLLED_STARTING: &str = "CONTROLLED_STARTING";

/// Printed by the controlled process once raw mode is in effect and it is safe to send
/// input (entering raw mode discards pending input).
pub const CONTROLLED_READY: &str = "CONTROLLED_READY";

/// Prefixes of the verdict lines printed by the controlled process.
pub const SUCCESS_PREFIX: &str = "SUCCESS:";
pub const FAILED_PREFIX: &str = "FAILED:";
