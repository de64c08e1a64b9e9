//! Exporter error types.

use thiserror::Error;

/// Result type for exporter operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while configuring an export.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Unrecognised export format name.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Background string not of the form `solid:..`, `gradient:..` or `image:..`.
    #[error("Invalid background: {0}")]
    InvalidBackground(String),
}
