// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! File based [`tracing`] setup.
//!
//! stdout and stderr belong to the raw mode session, so logging is off unless it is
//! asked for, and then it goes to a file by default:
//!
//! ```no_run
//! use r3bl_kilo::{TracingConfig, WriterConfig};
//! use tracing_core::LevelFilter;
//!
//! # fn main() -> miette::Result<()> {
//! TracingConfig {
//!     writer_config: WriterConfig::File("log.txt".to_string()),
//!     level_filter: LevelFilter::DEBUG,
//! }
//! .install_global()?;
//! # Ok(())
//! # }
//! ```
//!
//! Use `tail -f log.txt` in another terminal to watch a session.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
