// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The byte that stops the input loop.
pub const QUIT_BYTE: u8 = b'q';

/// Ctrl+C character (0x03) - End of Text (ETX).
/// In cooked mode, typically triggers SIGINT. In raw mode, passed as byte 0x03.
pub const CONTROL_C: u8 = 0x03;

/// Ctrl+D character (0x04) - End of Transmission (EOT).
/// In cooked mode, typically signals EOF. In raw mode, passed as byte 0x04.
pub const CONTROL_D: u8 = 0x04;

/// Ctrl+Z character (0x1A). In cooked mode, typically triggers SIGTSTP.
pub const CONTROL_Z: u8 = 0x1A;

/// Enter arrives as carriage return, since `ICRNL` is off in raw mode.
pub const CONTROL_ENTER: u8 = b'\r';

/// ASCII Escape character (0x1B). Every escape sequence (arrow keys, Page Up, etc.)
/// starts with this byte.
pub const ANSI_ESC: u8 = 0x1B;

/// ASCII Delete (0x7F), which is what most terminals send for Backspace.
pub const ASCII_DEL: u8 = 0x7F;

/// Line terminator for output written while `OPOST` is off: there is no `\n` to `\r\n`
/// translation, so the carriage return has to be explicit.
pub const CRLF: &str = "\r\n";
