// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, run_stdin_session};

/// Install logging (if enabled), then run the session on the controlling terminal.
///
/// # Errors
///
/// Returns an error if the log file can't be opened, or if the session hits a
/// [`FatalDeviceError`]. The terminal has already been restored by then.
///
/// [`FatalDeviceError`]: crate::FatalDeviceError
pub fn run_app(cli_arg: CLIArg) -> miette::Result<()> {
    let tracing_config = cli_arg.global_options.tracing_config();
    let should_log = tracing_config.is_enabled();
    tracing_config.install_global()?;

    should_log.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = run_stdin_session();

    match &result {
        Ok(()) => tracing::debug!(message = "Session ended on quit byte"),
        Err(error) => tracing::error!(
            message = "Session ended with a fatal error",
            %error,
            related = error.related.len()
        ),
    }

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(result?)
}
