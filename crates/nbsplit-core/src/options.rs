//! Export configuration supplied once per run.

use crate::error::{ExportError, Result};
use serde::{Deserialize, Serialize};

/// Default section delimiter
pub const DEFAULT_DELIMITER: &str = "##";

/// Output file format for extracted sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Python source file
    #[default]
    Py,
    /// Plain text file
    Txt,
    /// Markdown file
    Md,
}

impl FileFormat {
    /// File extension for this format, without the leading dot
    #[inline]
    #[must_use = "returns the file extension for this format"]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Py => "py",
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }
}

impl std::fmt::Display for FileFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "py" => Ok(Self::Py),
            "txt" => Ok(Self::Txt),
            "md" => Ok(Self::Md),
            _ => Err(format!("Unknown file format '{s}'. Expected: py, txt, md")),
        }
    }
}

/// Options for one export run
///
/// Immutable configuration supplied by the presentation layer and
/// validated by [`ExportOptions::validate`] before the pipeline uses it.
///
/// # Examples
///
/// ```
/// use nbsplit_core::{ExportOptions, FileFormat};
///
/// let opts = ExportOptions::default()
///     .with_delimiter("# Section")
///     .with_markdown(true)
///     .with_file_format(FileFormat::Txt);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Literal string marking a section title line (compared verbatim,
    /// no regex, no case-folding)
    pub delimiter: String,

    /// Include narrative (markdown) cells in section content
    pub include_markdown: bool,

    /// Derive file names from section titles instead of positional
    /// `section_N` names
    pub use_title_as_filename: bool,

    /// Output file format for section entries
    pub file_format: FileFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            include_markdown: false,
            use_title_as_filename: false,
            file_format: FileFormat::Py,
        }
    }
}

impl ExportOptions {
    /// Set the section delimiter
    #[inline]
    #[must_use = "returns options with the delimiter configured"]
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set whether narrative cells are included in section content
    #[inline]
    #[must_use = "returns options with the markdown setting configured"]
    pub fn with_markdown(mut self, include: bool) -> Self {
        self.include_markdown = include;
        self
    }

    /// Set whether section titles are used as file names
    #[inline]
    #[must_use = "returns options with the file naming setting configured"]
    pub fn with_title_as_filename(mut self, enable: bool) -> Self {
        self.use_title_as_filename = enable;
        self
    }

    /// Set the output file format
    #[inline]
    #[must_use = "returns options with the file format configured"]
    pub fn with_file_format(mut self, format: FileFormat) -> Self {
        self.file_format = format;
        self
    }

    /// Validate the options before a pipeline run
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidOptions`] if the delimiter is empty.
    /// An empty delimiter would turn every code line into a section title.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(ExportError::InvalidOptions(
                "delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
