//! Error taxonomy for ganttview.
//!
//! Two kinds of failure exist in this application:
//!
//! - **Errors**: malformed input at a boundary (editor form fields, the
//!   project file, configuration). These are structured [`thiserror`]
//!   types that propagate with `?` and block the operation that caused
//!   them.
//! - **Range clamps**: out-of-domain stored values (progress outside
//!   [0,1], inverted date ranges). These are a policy, not an error: the
//!   layout engine clamps them so stored data always yields drawable
//!   geometry. Nothing in this module models them.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Everything that can abort startup or the main loop converts into this
/// via `From`, so `main` propagates with `?` and prints one message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the project data source.
    #[error("failed to load projects: {0}")]
    Load(#[from] LoadError),

    /// Configuration file or override could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing, or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl From<crate::view::TuiError> for AppError {
    fn from(err: crate::view::TuiError) -> Self {
        match err {
            crate::view::TuiError::Io(source) => AppError::Terminal(source),
        }
    }
}

/// Failure to load projects from a file source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The project file does not exist.
    #[error("project file not found: {0}")]
    NotFound(PathBuf),

    /// The project file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The project file is not valid JSON for the expected schema.
    #[error("invalid project JSON in {path}: {source}")]
    Json {
        /// Path with invalid contents.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected editor input.
///
/// Produced only at the editing boundary, before an [`crate::model::Event`]
/// is constructed; the layout engine never sees these. First failing field
/// aborts validation; there is no partial save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title field was empty or whitespace.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Progress field did not parse as a number.
    #[error("progress is not a number: {0:?}")]
    InvalidProgress(String),

    /// A date field did not parse in `dd.MM.yyyy` format.
    #[error("{field} is not a valid date (expected dd.MM.yyyy): {value:?}")]
    InvalidDate {
        /// Which field failed ("start date" or "end date").
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_messages_name_the_field() {
        let err = ValidationError::InvalidDate {
            field: "start date",
            value: "31.02.2024".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("start date"));
        assert!(msg.contains("31.02.2024"));
    }

    #[test]
    fn load_error_converts_into_app_error() {
        let err = LoadError::NotFound(PathBuf::from("/tmp/missing.json"));
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Load(_)));
    }

    #[test]
    fn tui_error_routes_to_terminal_variant() {
        let err = crate::view::TuiError::Io(std::io::Error::other("boom"));
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Terminal(_)));
        assert!(app.to_string().contains("boom"));
    }
}
