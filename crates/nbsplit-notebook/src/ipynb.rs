use crate::error::Result;
use nbformat::v4::{Cell as NbCell, Notebook as NbNotebook};

/// Decoded notebook content
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecodedNotebook {
    /// Notebook-level metadata
    pub metadata: NotebookMetadata,
    /// Cells in document order
    pub cells: Vec<Cell>,
}

/// Notebook-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookMetadata {
    /// Kernel name (e.g., "python3", "ir")
    pub kernel_name: Option<String>,
    /// Programming language name (e.g., "python", "R")
    pub language_name: Option<String>,
}

/// One unit of a notebook document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Whether the cell holds executable code or narrative text
    pub kind: CellKind,
    /// Verbatim cell source (multi-line, newline-separated)
    pub source: String,
}

/// Kind of notebook cell relevant to section splitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Executable code cell
    #[default]
    Code,
    /// Narrative (markdown) cell
    Narrative,
}

impl std::fmt::Display for CellKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Narrative => "narrative",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CellKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "narrative" | "markdown" | "md" => Ok(Self::Narrative),
            _ => Err(format!(
                "Unknown cell kind '{s}'. Expected: code, narrative"
            )),
        }
    }
}

/// Decode a Jupyter Notebook from raw uploaded bytes
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not valid UTF-8 text
/// - The notebook JSON is malformed or not a supported nbformat version
#[must_use = "this function returns a decoded notebook that should be processed"]
pub fn decode_notebook(bytes: &[u8]) -> Result<DecodedNotebook> {
    let content = std::str::from_utf8(bytes)?;
    decode_notebook_str(content)
}

/// Decode a Jupyter Notebook from a string
///
/// Notebooks in the 4.5+ schema parse directly; 4.1-4.4 documents are
/// upgraded transparently via the nbformat crate.
///
/// # Errors
///
/// Returns an error if the notebook JSON is malformed or the nbformat
/// version is unsupported.
#[must_use = "this function returns a decoded notebook that should be processed"]
pub fn decode_notebook_str(content: &str) -> Result<DecodedNotebook> {
    let notebook = match nbformat::parse_notebook(content)? {
        nbformat::Notebook::V4(notebook) => notebook,
        nbformat::Notebook::Legacy(legacy) => {
            nbformat::upgrade_legacy_notebook(legacy).map_err(crate::DecodeError::Upgrade)?
        }
    };

    let metadata = extract_metadata(&notebook);
    let cells = extract_cells(&notebook);

    Ok(DecodedNotebook { metadata, cells })
}

/// Extract notebook metadata
fn extract_metadata(notebook: &NbNotebook) -> NotebookMetadata {
    let kernel_name = notebook
        .metadata
        .kernelspec
        .as_ref()
        .map(|ks| ks.name.clone());

    let language_name = notebook
        .metadata
        .language_info
        .as_ref()
        .map(|li| li.name.clone());

    NotebookMetadata {
        kernel_name,
        language_name,
    }
}

/// Extract cells from notebook, preserving document order
///
/// Raw cells carry neither code nor narrative text and are dropped here;
/// the splitter never sees them.
fn extract_cells(notebook: &NbNotebook) -> Vec<Cell> {
    let mut cells = Vec::new();

    for cell in &notebook.cells {
        match cell {
            NbCell::Code { source, .. } => {
                cells.push(Cell {
                    kind: CellKind::Code,
                    source: source.join(""),
                });
            }
            NbCell::Markdown { source, .. } => {
                cells.push(Cell {
                    kind: CellKind::Narrative,
                    source: source.join(""),
                });
            }
            NbCell::Raw { .. } => {
                log::debug!("skipping raw cell; only code and markdown cells are segmented");
            }
        }
    }

    cells
}
