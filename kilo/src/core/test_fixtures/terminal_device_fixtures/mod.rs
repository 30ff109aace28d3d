// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod mock_terminal_device;
pub mod scripted_reader;

// Re-export.
pub use mock_terminal_device::*;
pub use scripted_reader::*;
