//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs go to a file; monitor them with
//! `tail -f` in another terminal. Respects `RUST_LOG`, defaults to
//! "info".

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("failed to create log directory at {path}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name.
    #[error("invalid log file path: {0}")]
    InvalidPath(PathBuf),

    /// A tracing subscriber was already installed.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based tracing at `log_path`.
///
/// Creates the parent directory on demand. ANSI colors are disabled so
/// the file stays readable.
///
/// # Errors
///
/// Fails when the directory cannot be created, the path has no file
/// name, or a subscriber is already set.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
            parent
        }
        _ => Path::new("."),
    };

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
