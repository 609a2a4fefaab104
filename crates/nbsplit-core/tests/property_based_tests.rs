//! Property-Based Tests
//!
//! Tests using property-based testing (proptest) to verify splitter
//! invariants:
//! - No false sections when the delimiter never appears
//! - No content loss or reordering after the first delimiter line
//! - Structurally identical output on repeated runs
//!
//! These tests complement unit tests by exploring the input space automatically.

use nbsplit_core::split_sections;
use nbsplit_core::{Cell, CellKind};
use proptest::prelude::*;

fn code_cell(source: String) -> Cell {
    Cell {
        kind: CellKind::Code,
        source,
    }
}

// ============================================================================
// Splitter Properties
// ============================================================================

/// Property: input with no delimiter-matching line yields zero sections
#[test]
fn proptest_no_false_sections() {
    proptest!(|(lines in proptest::collection::vec("[a-z0-9 ]{0,24}", 0..40))| {
        let cells = [code_cell(lines.join("\n"))];
        let sections = split_sections(&cells, "##", false);
        prop_assert!(sections.is_empty(), "no line starts with the delimiter");
    });
}

/// Property: titles and content lines reproduce the input lines from the
/// first delimiter line onward, in order
#[test]
fn proptest_no_content_loss_after_first_delimiter() {
    let line = prop_oneof![
        // Delimiter lines are generated without padding so the stripped
        // title equals the raw line.
        "## [a-z]{1,8}",
        "[a-z][a-z0-9 ]{0,16}",
        Just(String::new()),
    ];
    proptest!(|(lines in proptest::collection::vec(line, 1..40))| {
        let cells = [code_cell(lines.join("\n"))];
        let sections = split_sections(&cells, "##", false);

        let expected: Vec<&str> = match lines.iter().position(|l| l.trim().starts_with("##")) {
            Some(first) => lines[first..].iter().map(String::as_str).collect(),
            None => Vec::new(),
        };

        let mut flattened: Vec<&str> = Vec::new();
        for section in &sections {
            flattened.push(section.title.as_str());
            flattened.extend(section.content.iter().map(String::as_str));
        }

        prop_assert_eq!(flattened, expected);
    });
}

/// Property: every emitted section has a non-empty title
#[test]
fn proptest_titles_never_empty() {
    proptest!(|(source in ".*{0,300}")| {
        let cells = [code_cell(source)];
        for section in split_sections(&cells, "##", false) {
            prop_assert!(!section.title.is_empty());
            prop_assert!(section.title.starts_with("##"));
        }
    });
}

/// Property: splitting is idempotent over arbitrary cell sequences
#[test]
fn proptest_split_idempotent() {
    let cell = (any::<bool>(), ".*{0,80}").prop_map(|(is_code, source)| Cell {
        kind: if is_code {
            CellKind::Code
        } else {
            CellKind::Narrative
        },
        source,
    });
    proptest!(|(cells in proptest::collection::vec(cell, 0..12))| {
        let first = split_sections(&cells, "##", true);
        let second = split_sections(&cells, "##", true);
        prop_assert_eq!(first, second);
    });
}
