//! Error types for rich-text encoding.

use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF encoding errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtfError {
    /// A control character RTF has no representation for
    #[error("character U+{0:04X} cannot be represented in RTF")]
    UnrepresentableChar(u32),
}
