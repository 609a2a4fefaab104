//! Archive assembly: one compressed entry per section.

use crate::error::Result;
use crate::options::ExportOptions;
use crate::split::Section;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compute the archive entry name for a section.
///
/// With `use_title_as_filename` set, the title is stripped of leading and
/// trailing `#` characters and whitespace, internal spaces become
/// underscores, and the result is lowercased. Otherwise sections are
/// numbered `section_1`, `section_2`, ... in sequence order.
///
/// # Examples
///
/// ```
/// use nbsplit_core::{section_file_name, ExportOptions, Section};
///
/// let section = Section {
///     title: "## My Title".to_string(),
///     content: vec![],
/// };
/// let options = ExportOptions::default().with_title_as_filename(true);
/// assert_eq!(section_file_name(&section, 0, &options), "my_title.py");
/// assert_eq!(
///     section_file_name(&section, 0, &ExportOptions::default()),
///     "section_1.py"
/// );
/// ```
#[must_use = "returns the computed entry name"]
pub fn section_file_name(section: &Section, index: usize, options: &ExportOptions) -> String {
    if options.use_title_as_filename {
        let stem = section
            .title
            .trim_matches('#')
            .trim()
            .replace(' ', "_")
            .to_lowercase();
        format!("{stem}.{}", options.file_format)
    } else {
        format!("section_{}.{}", index + 1, options.file_format)
    }
}

/// Render a section as file content: a `# {title}` header line followed
/// by the content lines joined with newlines.
#[must_use = "returns the rendered file content"]
pub fn section_file_content(section: &Section) -> String {
    let mut content = format!("# {}\n", section.title);
    content.push_str(&section.content.join("\n"));
    content
}

/// Map each entry name to the index of the last section that computes it
fn last_use_map(names: &[String]) -> HashMap<&str, usize> {
    let mut last_use = HashMap::new();
    for (index, name) in names.iter().enumerate() {
        last_use.insert(name.as_str(), index);
    }
    last_use
}

/// Entry names that survive into the archive, in write order.
///
/// One name per section, minus names shadowed by a later colliding
/// section — exactly what [`build_archive`] writes.
#[must_use = "returns the entry names the archive will contain"]
pub fn archive_entry_names(sections: &[Section], options: &ExportOptions) -> Vec<String> {
    let names: Vec<String> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| section_file_name(section, index, options))
        .collect();
    let last_use = last_use_map(&names);

    names
        .iter()
        .enumerate()
        .filter(|(index, name)| last_use[name.as_str()] == *index)
        .map(|(_, name)| name.clone())
        .collect()
}

/// Assemble the sections into an in-memory zip archive.
///
/// Entries are written in sequence order, deflate-compressed. Title-derived
/// names are not disambiguated: when two sections reduce to the same name,
/// only the later one survives in the archive. That matches what extracting
/// duplicate entries would leave on disk; the shadowed section is logged.
///
/// # Errors
///
/// Returns an error if the zip writer rejects an entry or an I/O failure
/// occurs while writing the buffer.
#[must_use = "this function returns archive bytes that should be offered for download"]
pub fn build_archive(sections: &[Section], options: &ExportOptions) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let entry_options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let names: Vec<String> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| section_file_name(section, index, options))
        .collect();
    let last_use = last_use_map(&names);

    for (index, section) in sections.iter().enumerate() {
        let name = &names[index];
        if last_use[name.as_str()] != index {
            log::warn!("duplicate section file name {name:?}; a later section shadows this one");
            continue;
        }
        writer.start_file(name.as_str(), entry_options)?;
        writer.write_all(section_file_content(section).as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FileFormat;
    use std::io::Read;
    use zip::ZipArchive;

    fn section(title: &str, content: &[&str]) -> Section {
        Section {
            title: title.to_string(),
            content: content.iter().map(ToString::to_string).collect(),
        }
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_default_entry_names_are_positional() {
        let sections = [section("# Section 1", &["x=1"]), section("# Section 2", &["x=2"])];
        let options = ExportOptions::default();
        let bytes = build_archive(&sections, &options).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "section_1.py");
        assert_eq!(archive.by_index(1).unwrap().name(), "section_2.py");
    }

    #[test]
    fn test_entry_content_layout() {
        let sections = [section("# Section 1", &["x=1"])];
        let bytes = build_archive(&sections, &ExportOptions::default()).unwrap();
        assert_eq!(read_entry(&bytes, "section_1.py"), "# # Section 1\nx=1");
    }

    #[test]
    fn test_empty_content_section() {
        let sections = [section("## A", &[])];
        let bytes = build_archive(&sections, &ExportOptions::default()).unwrap();
        assert_eq!(read_entry(&bytes, "section_1.py"), "# ## A\n");
    }

    #[test]
    fn test_title_derived_names() {
        let sections = [section("## My Title", &["foo"])];
        let options = ExportOptions::default().with_title_as_filename(true);
        let bytes = build_archive(&sections, &options).unwrap();
        assert_eq!(read_entry(&bytes, "my_title.py"), "# ## My Title\nfoo");
    }

    #[test]
    fn test_file_format_extension() {
        let sections = [section("## A", &["foo"])];
        let options = ExportOptions::default().with_file_format(FileFormat::Txt);
        let bytes = build_archive(&sections, &options).unwrap();
        assert_eq!(read_entry(&bytes, "section_1.txt"), "# ## A\nfoo");
    }

    #[test]
    fn test_title_name_keeps_internal_hashes() {
        let opts = ExportOptions::default().with_title_as_filename(true);
        let s = section("## A # B ##", &[]);
        assert_eq!(section_file_name(&s, 0, &opts), "a_#_b.py");
    }

    #[test]
    fn test_name_collision_later_entry_wins() {
        let sections = [
            section("## Dup", &["first"]),
            section("## dup", &["second"]),
        ];
        let options = ExportOptions::default().with_title_as_filename(true);
        let bytes = build_archive(&sections, &options).unwrap();
        // Both titles reduce to dup.py; the later section wins.
        let archive = ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(read_entry(&bytes, "dup.py"), "# ## dup\nsecond");
    }

    #[test]
    fn test_entry_names_omit_shadowed_duplicates() {
        let sections = [
            section("## Dup", &[]),
            section("## dup", &[]),
            section("## Other", &[]),
        ];
        let options = ExportOptions::default().with_title_as_filename(true);
        assert_eq!(
            archive_entry_names(&sections, &options),
            vec!["dup.py", "other.py"]
        );
    }

    #[test]
    fn test_archive_readable_from_start() {
        let sections = [section("## A", &["foo"]), section("## B", &["bar"])];
        let bytes = build_archive(&sections, &ExportOptions::default()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
    }
}
