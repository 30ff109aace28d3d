// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// `VMIN` in raw mode: a read may return with zero bytes.
pub const VMIN_RAW_MODE: u8 = 0;

/// `VTIME` in raw mode, in tenths of a second: a read with no input available returns
/// after 100ms.
pub const VTIME_RAW_MODE: u8 = 1;

/// Minimum-bytes / timeout read semantics applied when entering raw mode. With
/// `min_bytes == 0` and `timeout_deciseconds > 0` a `read(2)` returns as soon as one byte
/// is available, or returns `0` once the timeout elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPolicy {
    pub min_bytes: u8,
    pub timeout_deciseconds: u8,
}

impl Default for ReadPolicy {
    fn default() -> Self {
        Self {
            min_bytes: VMIN_RAW_MODE,
            timeout_deciseconds: VTIME_RAW_MODE,
        }
    }
}

impl ReadPolicy {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_deciseconds) * 100)
    }
}
