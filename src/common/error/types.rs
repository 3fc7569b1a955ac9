//! Unified error type for the export pipeline.
use thiserror::Error;

/// Main error type for export operations.
///
/// Only archive assembly and input loading surface errors to callers.
/// Per-entry problems (missing content, unrepresentable text) degrade the
/// affected slides instead.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive writer could not finalize
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Two files were registered under the same archive name
    #[error("Duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// Schedule input could not be deserialized
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Schedule source of a media type nobody can read
    #[error("Unsupported source type: {0}")]
    Unsupported(String),

    /// Schedule source that decodes to nothing but whitespace
    #[error("Schedule source is empty or unreadable")]
    EmptySource,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
