// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_kilo`
//!
//! The terminal substrate for the kilo text editor. This crate owns the lifecycle of the
//! controlling terminal's line discipline settings:
//!
//! 1. Capture the original ("cooked") termios settings exactly once.
//! 2. Derive and apply a raw mode configuration with bounded reads (`VMIN=0`,
//!    `VTIME=1`, so a read returns after at most 100ms).
//! 3. Run an input loop that reads one byte at a time, echoes a classification of
//!    each byte, and stops on `q`.
//! 4. Restore the original settings on every exit path: normal return, a propagated
//!    fatal error, or a panic.
//!
//! ```text
//! ┌────────────────────────┐   owns   ┌─────────────────────────┐
//! │ LifecycleController    ├─────────▶│ TerminalContext         │
//! │ (enter → run → restore)│          │ (snapshot, once)        │
//! └───────────┬────────────┘          └────────────▲────────────┘
//!             │ RawModeGuard                       │ captures / restores
//!             ▼                                    │
//! ┌────────────────────────┐          ┌────────────┴────────────┐
//! │ InputLoopController    │          │ TerminalModeManager     │
//! │ (Running → Terminated) │          │ (TerminalDevice seam)   │
//! └────────────────────────┘          └─────────────────────────┘
//! ```
//!
//! Key-sequence interpretation, rendering, and editing live above this crate.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod kilo_app;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
pub use kilo_app::*;
