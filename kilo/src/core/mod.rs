// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Connect to source file.
pub mod input_loop;
pub mod lifecycle;
pub mod log;
pub mod terminal_raw_mode;
pub mod test_fixtures;

// Re-export.
pub use input_loop::*;
pub use lifecycle::*;
pub use log::*;
pub use terminal_raw_mode::*;
pub use test_fixtures::*;
