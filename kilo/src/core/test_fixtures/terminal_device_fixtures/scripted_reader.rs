// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{self, Read}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedRead {
    Byte(u8),
    /// `read()` returns `Ok(0)`, as it does when the raw mode timeout elapses.
    Timeout,
    Error(io::ErrorKind),
}

/// A [`Read`] impl that plays back one [`ScriptedRead`] per `read()` call. Once the
/// script runs out, every read fails with [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug, Default)]
pub struct ScriptedReader {
    script: VecDeque<ScriptedRead>,
}

impl ScriptedReader {
    #[must_use]
    pub fn new(script: Vec<ScriptedRead>) -> Self {
        Self {
            script: script.into(),
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(ScriptedRead::Byte).collect())
    }

    pub fn remaining(&self) -> usize { self.script.len() }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.script.pop_front() {
            Some(ScriptedRead::Byte(byte)) => match buf.first_mut() {
                Some(slot) => {
                    *slot = byte;
                    Ok(1)
                }
                None => Ok(0),
            },
            Some(ScriptedRead::Timeout) => Ok(0),
            Some(ScriptedRead::Error(kind)) => Err(io::Error::from(kind)),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        }
    }
}
