// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Open (or create) the log file at `path_str`, appending to it. The file is never
/// rotated.
///
/// Note that if you wrap this up in a non blocking writer, the logs written just before
/// the process exits can be lost, since nothing holds on to the worker guard.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The file or its directory can't be created or opened
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use {} as a log file. It has no file name.",
            path.display()
        )
    })?;

    // A bare file name has an empty parent, which means the current directory.
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::tests_support::TestLogDir;

    #[test]
    fn test_try_create_makes_file() {
        let dir = TestLogDir::new("appender");
        let file_path = dir.join("kilo.log");

        let _appender = try_create(&file_path).unwrap();

        assert!(Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
