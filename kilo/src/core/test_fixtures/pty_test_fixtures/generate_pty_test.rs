// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Macro that generates PTY-based integration tests with automatic test name injection.
///
/// This macro handles the boilerplate for PTY-based integration tests:
///
/// 1. **CI detection**: Automatically skips the test in CI environments
/// 2. **Process routing**: Routes to controller or controlled code based on an
///    environment variable
/// 3. **PTY setup**: Creates a PTY pair and re-runs the current test binary (filtered to
///    this one test) as the controlled process, with the PTY as its controlling terminal
///
/// ```text
/// ┌──────────────────────────────┐  PTY input   ┌──────────────────────────────┐
/// │ Controller (test process)    ├─────────────▶│ Controlled (same test, env   │
/// │ - creates the PTY pair       │              │   var set)                   │
/// │ - writes input (optional)    │◀─────────────┤ - enters raw mode, reads     │
/// │ - asserts on output + status │  PTY output  │ - reports on stdout, exits   │
/// └──────────────────────────────┘              └──────────────────────────────┘
/// ```
///
/// # Notes
///
/// - The PTY is 24x80.
/// - The controlled function MUST call `std::process::exit()`, otherwise the rest of
///   the test harness would run inside the PTY.
/// - stdout and stderr of the controlled process are merged into one stream on the
///   controller side. Filter by content, not by stream.
///
/// # Parameters
///
/// - `test_fn`: The test function name (used as identifier, not string)
/// - `controller`: A function that accepts `(pty_pair, child)`
/// - `controlled`: A function that runs in the controlled process (must not return)
#[macro_export]
macro_rules! generate_pty_test {
    (
        $(#[$meta:meta])*
        test_fn: $test_name:ident,
        controller: $controller_fn:expr,
        controlled: $controlled_fn:expr
    ) => {
        $(#[$meta])*
        #[test]
        fn $test_name() {
            use std::io::Write;
            use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};

            let pty_controlled_env_var =
                std::env::var($crate::PTY_CONTROLLED_ENV_VAR);

            // Skip in CI if running as controller.
            if pty_controlled_env_var.is_err() && is_ci::cached() {
                println!("⏭️  Skipped in CI (requires interactive terminal)");
                return;
            }

            // Check if we're running as the controlled process.
            if pty_controlled_env_var.is_ok() {
                println!("{}", $crate::CONTROLLED_STARTING);
                std::io::stdout().flush().expect("Failed to flush stdout");

                // Never returns, exits the process.
                $controlled_fn();
            }

            eprintln!("🚀 Controller: creating PTY for {}", stringify!($test_name));

            let pty_system = NativePtySystem::default();
            let pty_pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 80,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .expect("Failed to create PTY pair");

            let test_binary =
                std::env::current_exe().expect("Failed to get current executable");
            let mut cmd = CommandBuilder::new(&test_binary);
            cmd.env($crate::PTY_CONTROLLED_ENV_VAR, "1");
            cmd.env("RUST_BACKTRACE", "1");
            cmd.args(&["--test-threads", "1", "--nocapture", stringify!($test_name)]);

            let child = pty_pair
                .slave
                .spawn_command(cmd)
                .expect("Failed to spawn controlled process");

            $controller_fn(pty_pair, child);
        }
    };
}
