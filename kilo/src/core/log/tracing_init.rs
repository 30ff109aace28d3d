// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, WriterConfig, log::rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Log files
/// are read with `tail -f` or an editor, so no ANSI colors.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers, or `None` if logging is disabled. This does not initialize the
/// tracing system, see [`TracingConfig::install_global()`] for that.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if !tracing_config.is_enabled() {
        return Ok(None);
    }

    let TracingConfig {
        writer_config,
        level_filter,
    } = tracing_config;

    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // The global level filter, so events above it are skipped before any layer sees
    // them.
    layers.push(Box::new(level_filter));

    if let Some(layer) = try_create_stderr_layer(level_filter, &writer_config) {
        layers.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        layers.push(layer);
    }

    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_stderr_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stderr => Some(Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        _ => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(tracing_log_file_path) => {
            let file = rolling_file_appender_impl::try_create(tracing_log_file_path)?;
            Some(Box::new(
                create_fmt!().with_writer(file).with_filter(level_filter),
            ))
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::tests_support::TestLogDir;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_disabled_config_has_no_layers() {
        let layers = try_create_layers(TracingConfig::default()).unwrap();
        assert!(layers.is_none());
    }

    #[test]
    fn test_try_create_stderr_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_stderr_layer(LevelFilter::DEBUG, &WriterConfig::Stderr);
        assert!(layer.is_some());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = TestLogDir::new("file_layer");
        let file_path = dir.join("kilo.log");

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(
                LevelFilter::DEBUG,
                &WriterConfig::File(file_path.clone()),
            )
            .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_events_are_written_to_file() {
        let dir = TestLogDir::new("events");
        let file_path = dir.join("kilo.log");
        let tracing_config =
            TracingConfig::new_file(Some(file_path.clone()), LevelFilter::DEBUG);

        let layers = try_create_layers(tracing_config).unwrap().unwrap();
        // Level filter + file layer.
        assert_eq!(layers.len(), 2);

        // Note that tests should NOT install a global subscriber, so scope it to this
        // thread instead.
        let subscriber = tracing_subscriber::registry().with(layers);
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(message = "Raw mode entered");
            tracing::trace!(message = "Read timed out with no input");
        });

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("Raw mode entered"));
        assert!(!contents.contains("Read timed out"));
    }
}
