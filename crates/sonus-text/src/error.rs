//! Error types for the text crate.

use thiserror::Error;

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

/// Errors that can occur while scoring transcripts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The reference has no words to normalise against.
    #[error("reference contains no words")]
    EmptyReference,
}
