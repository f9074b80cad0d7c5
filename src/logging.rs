//! File-based tracing. Nothing may be written to the terminal while the UI owns it.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file path has no file name component.
    #[error("log file path has no file name")]
    NoFileName,

    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file appender could not be opened.
    #[error("could not open log file: {0}")]
    Appender(#[from] InitError),

    /// A global subscriber was already installed.
    #[error("could not install subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Installs a subscriber writing to `config.log_file`.
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("easyftp={}", config.log_level)));

    let file_name = config
        .log_file
        .file_name()
        .ok_or(LoggingError::NoFileName)?;
    let dir = config
        .log_file
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn path_without_file_name_is_rejected() {
        let config = Config {
            log_file: PathBuf::from("/"),
            ..Config::default()
        };
        assert!(matches!(init(&config), Err(LoggingError::NoFileName)));
    }
}
