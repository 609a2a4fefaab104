//! Error types for the section export pipeline.
//!
//! All pipeline failures are typed; nothing propagates as a panic. An
//! export that finds zero sections is an outcome, not an error — see
//! [`crate::ExportOutcome::NoSections`].

use thiserror::Error;

/// Error types that can occur during a section export run.
///
/// # Examples
///
/// ```
/// use nbsplit_core::{export_notebook, ExportError, ExportOptions};
///
/// match export_notebook(b"not a notebook", &ExportOptions::default()) {
///     Err(ExportError::Decode(e)) => eprintln!("bad upload: {e}"),
///     Err(e) => eprintln!("export failed: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExportError {
    /// Input bytes are not a parseable notebook document.
    #[error("Failed to decode notebook: {0}")]
    Decode(#[from] nbsplit_notebook::DecodeError),

    /// Export options failed validation before the pipeline ran.
    #[error("Invalid export options: {0}")]
    InvalidOptions(String),

    /// The zip writer rejected an entry.
    #[error("Failed to assemble section archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O failure while writing the in-memory archive.
    #[error("I/O error while assembling archive: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
