//! # nbsplit-notebook
//!
//! Jupyter Notebook (.ipynb) decoding for the nbsplit section exporter.
//!
//! This crate turns the raw bytes of a notebook document into an ordered
//! sequence of cells, each tagged as executable code or narrative text.
//! Notebooks in the current nbformat 4.5+ schema are parsed directly;
//! older 4.x documents are upgraded transparently. Anything else fails
//! with a [`DecodeError`] carrying a human-readable cause.
//!
//! ## Example
//!
//! ```no_run
//! use nbsplit_notebook::decode_notebook;
//!
//! let bytes = std::fs::read("example.ipynb").unwrap();
//! let notebook = decode_notebook(&bytes)?;
//! for cell in &notebook.cells {
//!     println!("{}: {}", cell.kind, cell.source);
//! }
//! # Ok::<(), nbsplit_notebook::DecodeError>(())
//! ```

/// Error types for notebook decoding
pub mod error;
/// Jupyter notebook (ipynb) decoder
pub mod ipynb;

pub use error::{DecodeError, Result};
pub use ipynb::{
    decode_notebook, decode_notebook_str, Cell, CellKind, DecodedNotebook, NotebookMetadata,
};
