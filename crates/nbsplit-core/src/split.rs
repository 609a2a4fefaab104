//! Section splitting over a decoded cell sequence.
//!
//! A single forward pass over the cells, line-oriented, no backtracking.
//! The scan is an explicit two-state machine: either no section is open
//! yet, or exactly one section is open and accumulating lines. Code lines
//! seen before the first delimiter line are discarded — that is the
//! documented rule, not an accident of the implementation.

use nbsplit_notebook::{Cell, CellKind};
use serde::{Deserialize, Serialize};

/// Marker line wrapped around narrative text inside a code-oriented file
const NARRATIVE_FENCE: &str = "\"\"\"";

/// A titled run of lines bounded by delimiter lines
///
/// Invariant: `title` is never empty (it is a stripped line that starts
/// with the delimiter); `content` may be empty when two delimiter lines
/// are adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    /// The stripped delimiter line that opened this section
    pub title: String,
    /// Raw content lines, in document order
    pub content: Vec<String>,
}

/// Scan state: no section open yet, or one section accumulating lines
enum ScanState {
    NoOpenSection,
    OpenSection(Section),
}

impl ScanState {
    /// A delimiter line: seal the open section (if any) and open a new one
    fn on_delimiter_line(&mut self, title: String, sealed: &mut Vec<Section>) {
        if let Self::OpenSection(section) = std::mem::replace(self, Self::NoOpenSection) {
            sealed.push(section);
        }
        *self = Self::OpenSection(Section {
            title,
            content: Vec::new(),
        });
    }

    /// An ordinary code line: append raw, or discard when nothing is open
    fn on_code_line(&mut self, line: &str) {
        if let Self::OpenSection(section) = self {
            section.content.push(line.to_string());
        }
    }

    /// A narrative cell: wrap in fence markers, or discard when nothing is open
    fn on_narrative_cell(&mut self, text: &str) {
        if let Self::OpenSection(section) = self {
            section.content.push(NARRATIVE_FENCE.to_string());
            section.content.push(text.to_string());
            section.content.push(NARRATIVE_FENCE.to_string());
        }
    }

    /// End of input: seal the open section, if any
    fn finish(self, sealed: &mut Vec<Section>) {
        if let Self::OpenSection(section) = self {
            sealed.push(section);
        }
    }
}

/// Split a decoded cell sequence into sections.
///
/// A code line whose whitespace-stripped form starts with `delimiter`
/// opens a new section titled with the stripped line. The delimiter is
/// compared literally; a delimiter appearing mid-line does not count.
/// Narrative cells are wrapped in `"""` fence lines and appended to the
/// open section when `include_markdown` is set, and contribute nothing
/// otherwise or when no section is open.
///
/// Returns an empty sequence when no delimiter line is ever found — a
/// valid outcome, not an error.
///
/// # Examples
///
/// ```
/// use nbsplit_core::split_sections;
/// use nbsplit_notebook::{Cell, CellKind};
///
/// let cells = [Cell {
///     kind: CellKind::Code,
///     source: "## A\nfoo".to_string(),
/// }];
/// let sections = split_sections(&cells, "##", false);
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].title, "## A");
/// assert_eq!(sections[0].content, vec!["foo"]);
/// ```
#[must_use = "this function returns the extracted sections"]
pub fn split_sections(cells: &[Cell], delimiter: &str, include_markdown: bool) -> Vec<Section> {
    let mut sealed = Vec::new();
    let mut state = ScanState::NoOpenSection;

    for cell in cells {
        match cell.kind {
            CellKind::Code => {
                for line in cell.source.split('\n') {
                    let stripped = line.trim();
                    if stripped.starts_with(delimiter) {
                        state.on_delimiter_line(stripped.to_string(), &mut sealed);
                    } else {
                        state.on_code_line(line);
                    }
                }
            }
            CellKind::Narrative => {
                if include_markdown {
                    state.on_narrative_cell(&cell.source);
                }
            }
        }
    }

    state.finish(&mut sealed);
    sealed
}
