use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::AppError;

/// Sets up logging for the application.
///
/// Logs always go to standard error so the final summary on standard
/// output stays clean. When `log_file` is given, a daily-rolling file
/// appender is added next to it.
///
/// Returns the guard that must be kept alive for the duration of the
/// program to ensure file logs are flushed properly; `None` when no
/// file logging was requested.
pub fn setup_logging(log_file: Option<&str>) -> Result<Option<WorkerGuard>, AppError> {
    let registry = tracing_subscriber::registry();
    let stderr_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(
            EnvFilter::from_default_env()
                .add_directive("challonge_export=info".parse().unwrap()),
        );

    match log_file {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let log_dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("challonge_export.log");

            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    AppError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            registry
                .with(stderr_layer)
                .with(
                    fmt::Layer::new()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(
                            EnvFilter::from_default_env()
                                .add_directive("challonge_export=info".parse().unwrap()),
                        ),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            registry.with(stderr_layer).init();
            Ok(None)
        }
    }
}
