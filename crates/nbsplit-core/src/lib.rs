//! # nbsplit-core
//!
//! Splits a decoded Jupyter notebook into delimiter-bounded sections and
//! packages each section as one file inside an in-memory zip archive.
//!
//! The pipeline is a single synchronous pass: raw bytes are decoded into
//! cells ([`nbsplit_notebook`]), the cells are scanned into [`Section`]s
//! ([`split_sections`]), and the sections are written as compressed
//! entries ([`build_archive`]). Every value is owned by one invocation;
//! nothing persists across runs and nothing is shared between concurrent
//! callers.
//!
//! ## Example
//!
//! ```no_run
//! use nbsplit_core::{export_notebook, ExportOptions, ExportOutcome};
//!
//! let bytes = std::fs::read("analysis.ipynb").unwrap();
//! match export_notebook(&bytes, &ExportOptions::default())? {
//!     ExportOutcome::Archive(archive) => {
//!         println!("{} sections exported", archive.entries.len());
//!         std::fs::write(nbsplit_core::ARCHIVE_FILE_NAME, archive.bytes).unwrap();
//!     }
//!     ExportOutcome::NoSections => {
//!         println!("no sections found; check the delimiter");
//!     }
//! }
//! # Ok::<(), nbsplit_core::ExportError>(())
//! ```

/// Archive assembly
pub mod archive;
/// Pipeline error taxonomy
pub mod error;
/// Export configuration
pub mod options;
/// Section splitting
pub mod split;

pub use archive::{archive_entry_names, build_archive, section_file_content, section_file_name};
pub use error::{ExportError, Result};
pub use options::{ExportOptions, FileFormat, DEFAULT_DELIMITER};
pub use split::{split_sections, Section};

// Re-exported so presentation layers only need one crate on their side.
pub use nbsplit_notebook::{decode_notebook, Cell, CellKind, DecodeError, DecodedNotebook};

/// File name offered for the downloadable archive
pub const ARCHIVE_FILE_NAME: &str = "notebook_sections.zip";

/// MIME type for the archive download
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// A completed export: archive bytes plus the entry names in write order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionArchive {
    /// Complete zip archive, readable from offset 0
    pub bytes: Vec<u8>,
    /// Entry names in write order, for previews; names shadowed by a
    /// later colliding section are omitted, matching the archive
    pub entries: Vec<String>,
}

/// Outcome of one export run
///
/// Finding zero sections is a valid result the presentation layer turns
/// into a warning, not a pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Sections were found and packaged
    Archive(SectionArchive),
    /// No delimiter line matched; no archive was produced
    NoSections,
}

/// Run the full decode → split → build pipeline on uploaded notebook bytes.
///
/// # Errors
///
/// Returns [`ExportError::InvalidOptions`] if the options fail validation,
/// [`ExportError::Decode`] if the bytes are not a parseable notebook, and
/// [`ExportError::Archive`] / [`ExportError::Io`] if archive assembly
/// fails. No partial archive is ever returned.
#[must_use = "this function returns the export outcome that should be surfaced to the user"]
pub fn export_notebook(bytes: &[u8], options: &ExportOptions) -> Result<ExportOutcome> {
    options.validate()?;

    let notebook = decode_notebook(bytes)?;
    let sections = split_sections(&notebook.cells, &options.delimiter, options.include_markdown);
    if sections.is_empty() {
        return Ok(ExportOutcome::NoSections);
    }

    let entries = archive_entry_names(&sections, options);
    let bytes = build_archive(&sections, options)?;

    Ok(ExportOutcome::Archive(SectionArchive { bytes, entries }))
}
