// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod pty_test_fixtures;
pub mod terminal_device_fixtures;

// Re-export.
pub use pty_test_fixtures::*;
pub use terminal_device_fixtures::*;
