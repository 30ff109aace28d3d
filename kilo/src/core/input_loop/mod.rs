// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod byte_constants;
pub mod byte_report;
pub mod input_loop_controller;

// Re-export.
pub use byte_constants::*;
pub use byte_report::*;
pub use input_loop_controller::*;
