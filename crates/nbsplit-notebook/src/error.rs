//! Error types for notebook decoding

use thiserror::Error;

/// Error type for notebook decoding operations
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Uploaded bytes are not valid UTF-8 text
    #[error("Notebook bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Input is not a parseable notebook document
    ///
    /// Covers malformed JSON, missing notebook fields, and unsupported
    /// `nbformat` versions, with the cause reported by the parser.
    #[error("Invalid notebook document: {0}")]
    Notebook(#[from] nbformat::NotebookError),

    /// A legacy 4.x notebook could not be upgraded to the current schema
    #[error("Failed to upgrade legacy notebook: {0}")]
    Upgrade(anyhow::Error),
}

/// Result type alias for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;
