// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Placeholder for key event handling: every byte read is classified and echoed back as
//! a line of text. This only describes the current observable output and doesn't imply
//! anything about how key sequences will be interpreted later.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// Control byte, read as a Latin-1 code point: C0 (`0..=31`), `DEL` (`127`) and C1
    /// (`128..=159`). These are not printable, so only their decimal value is shown.
    Control,
    /// Anything else. Bytes `>= 0xA0` are displayed as their Latin-1 character so that
    /// the report line is always valid UTF-8.
    Printable,
}

impl ByteClass {
    #[must_use]
    pub fn of(byte: u8) -> Self {
        if char::from(byte).is_control() {
            ByteClass::Control
        } else {
            ByteClass::Printable
        }
    }
}

/// One report line for a byte, without the line terminator.
///
/// | Byte   | Class       | Rendered  |
/// | :----- | :---------- | :-------- |
/// | `0x03` | `Control`   | `3`       |
/// | `0x61` | `Printable` | `97 ('a')`|
/// | `0x9B` | `Control`   | `155`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteReport {
    pub byte: u8,
    pub class: ByteClass,
}

impl From<u8> for ByteReport {
    fn from(byte: u8) -> Self {
        Self {
            byte,
            class: ByteClass::of(byte),
        }
    }
}

impl Display for ByteReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.class {
            ByteClass::Control => write!(f, "{}", self.byte),
            ByteClass::Printable => {
                write!(f, "{} ('{}')", self.byte, char::from(self.byte))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ANSI_ESC, ASCII_DEL, CONTROL_C, CONTROL_ENTER, QUIT_BYTE};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(CONTROL_C, ByteClass::Control ; "ctrl c")]
    #[test_case(CONTROL_ENTER, ByteClass::Control ; "enter")]
    #[test_case(ANSI_ESC, ByteClass::Control ; "escape")]
    #[test_case(ASCII_DEL, ByteClass::Control ; "delete")]
    #[test_case(0x00, ByteClass::Control ; "nul")]
    #[test_case(b' ', ByteClass::Printable ; "space")]
    #[test_case(b'a', ByteClass::Printable ; "letter")]
    #[test_case(b'~', ByteClass::Printable ; "tilde")]
    #[test_case(0x80, ByteClass::Control ; "first c1 control")]
    #[test_case(0x85, ByteClass::Control ; "next line")]
    #[test_case(0x9B, ByteClass::Control ; "control sequence introducer")]
    #[test_case(0x9F, ByteClass::Control ; "last c1 control")]
    #[test_case(0xA0, ByteClass::Printable ; "no break space")]
    #[test_case(0xC3, ByteClass::Printable ; "high byte")]
    fn test_classify(byte: u8, expected: ByteClass) {
        assert_eq!(ByteClass::of(byte), expected);
    }

    #[test_case(CONTROL_C, "3" ; "control byte shows only decimal")]
    #[test_case(ANSI_ESC, "27" ; "escape shows only decimal")]
    #[test_case(b'a', "97 ('a')" ; "printable shows decimal and char")]
    #[test_case(QUIT_BYTE, "113 ('q')" ; "quit byte is reported too")]
    #[test_case(0xE9, "233 ('é')" ; "high byte shows latin1 char")]
    #[test_case(0x85, "133" ; "next line shows only decimal")]
    #[test_case(0x9B, "155" ; "control sequence introducer shows only decimal")]
    fn test_render(byte: u8, expected: &str) {
        assert_eq!(ByteReport::from(byte).to_string(), expected);
    }

    #[test]
    fn test_no_byte_writes_a_control_char() {
        for byte in u8::MIN..=u8::MAX {
            let rendered = ByteReport::from(byte).to_string();
            assert!(
                !rendered.chars().any(char::is_control),
                "byte {byte:#04x} rendered as {rendered:?}"
            );
        }
    }
}
