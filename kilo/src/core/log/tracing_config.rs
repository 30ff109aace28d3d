// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::try_create_layers;
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure where logs go and how verbose they are.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The most verbose level that is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File`: path of the log file, eg: `log.txt` or `/tmp/kilo.log`.
/// - `Stderr`: only useful when stderr is redirected away from the terminal, since the
///   raw mode session owns the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
    Stderr,
}

impl Default for TracingConfig {
    /// Logging disabled.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer_config != WriterConfig::None && self.level_filter != LevelFilter::OFF
    }

    /// Install the layers from [`try_create_layers()`] as the global default subscriber.
    /// Does nothing if logging is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be opened, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        if let Some(layers) = try_create_layers(self)? {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
        }
        Ok(())
    }
}
