// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode for the kilo editor.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends `SIGINT`, Ctrl+Z sends `SIGTSTP`)
//! - Echoing is enabled (typed characters appear on screen)
//! - Output `\n` is translated to `\r\n`
//!
//! **Raw Mode** (as configured here):
//! - No line buffering: bytes are available immediately
//! - No signal generation: Ctrl+C arrives as the byte `0x03`
//! - No echo, no `\r` to `\n` input translation, no output post-processing
//! - Reads are bounded: `VMIN=0` and `VTIME=1`, so a `read(2)` returns as soon as one
//!   byte is available, or returns `0` bytes after 100ms. See [`ReadPolicy`].
//!
//! ## The `stty` Command
//!
//! `stty` manipulates the same termios settings from the shell. Handy when debugging:
//!
//! ```bash
//! stty -a          # All settings (input/output flags, control chars, etc.)
//! stty -g          # Machine-readable format (for save/restore)
//! stty sane        # Recover a terminal that was left in raw mode
//! ```
//!
//! ## Lifecycle
//!
//! 1. [`TerminalModeManager::enter_raw_mode()`] captures the original settings into the
//!    [`TerminalContext`] (first time only), derives a [`RawModeConfig`] from them, and
//!    applies it with `TCSAFLUSH` (pending output is written, unread input discarded).
//! 2. [`TerminalModeManager::restore_mode()`] applies the captured settings back, also
//!    with `TCSAFLUSH`. It can be called any number of times.
//! 3. [`RawModeGuard`] ties the two together so restoration happens on every exit path.
//!
//! ```no_run
//! use r3bl_kilo::{StdinTerminal, TerminalContext, TerminalModeManager};
//!
//! # fn main() -> Result<(), r3bl_kilo::FatalDeviceError> {
//! let context = TerminalContext::new();
//! let manager = TerminalModeManager::new(StdinTerminal::new(), &context);
//! let guard = manager.acquire()?;
//! // Terminal is now in raw mode ...
//! guard.release()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: Uses rustix's safe termios API on stdin
//! - **Everything else**: Every device operation fails with `Unsupported`
//!
//! [`TerminalContext`]: crate::TerminalContext

// Private modules (hide internal structure).
mod raw_mode_core;
mod read_policy;
mod terminal_device;
mod terminal_mode_snapshot;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(not(unix))]
mod raw_mode_unsupported;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
pub use read_policy::*;
pub use terminal_device::*;
pub use terminal_mode_snapshot::*;

#[cfg(unix)]
pub use raw_mode_unix::*;

#[cfg(not(unix))]
pub use raw_mode_unsupported::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
