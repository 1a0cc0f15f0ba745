//! Output format types and export file naming.
//!
//! # Example
//!
//! ```rust
//! use tgprettify::format::{OutputFormat, default_file_stem};
//! use tgprettify::core::KeywordSet;
//!
//! let format = OutputFormat::from_path("export.txt")?;
//! assert_eq!(format, OutputFormat::Text);
//!
//! let stem = default_file_stem(Some("Team Chat"), &KeywordSet::parse("c++, rust"));
//! assert_eq!(stem, "Team Chat_[c, rust]");
//! # Ok::<(), tgprettify::PrettifyError>(())
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::KeywordSet;
use crate::core::models::{FilteredResult, OutputConfig};
use crate::core::output;
use crate::error::{PrettifyError, Result};

/// File stem used when the document has no name.
pub const DEFAULT_FILE_STEM: &str = "telegram_chat";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-]").expect("static pattern is valid"));

/// Export encoding.
///
/// - [`Json`](OutputFormat::Json) - structured document, re-loadable as input
/// - [`Text`](OutputFormat::Text) - readable transcript for pasting into a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Json,

    #[serde(rename = "txt", alias = "text")]
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use tgprettify::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "txt", "text"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Text]
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(PrettifyError::invalid_format(
                "output",
                format!("Unknown file extension: '.{}'. Expected one of: json, txt", ext),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "TXT"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes the result to a file in the specified format.
pub fn write_to_format(
    result: &FilteredResult,
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        OutputFormat::Json => output::write_json(result, path),
        OutputFormat::Text => output::write_text(result, path, config),
    }
}

/// Renders the result to a string in the specified format.
pub fn to_format_string(
    result: &FilteredResult,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        OutputFormat::Json => output::to_json(result),
        OutputFormat::Text => Ok(output::to_text(result, config)),
    }
}

/// Derives the default export filename (without extension).
///
/// The chat name (or [`DEFAULT_FILE_STEM`]) is followed by a bracketed
/// keyword summary when keywords are active. Each keyword loses every
/// character outside `[\w-]`; if nothing is left of the summary, no suffix
/// is added. Path separators in the name become `_`.
///
/// ```rust
/// use tgprettify::format::default_file_stem;
/// use tgprettify::core::KeywordSet;
///
/// assert_eq!(default_file_stem(None, &KeywordSet::new()), "telegram_chat");
/// assert_eq!(default_file_stem(Some("a/b"), &KeywordSet::parse("x.y")), "a_b_[xy]");
/// assert_eq!(default_file_stem(Some("Chat"), &KeywordSet::parse("!!!")), "Chat");
/// ```
pub fn default_file_stem(name: Option<&str>, keywords: &KeywordSet) -> String {
    let base = name
        .unwrap_or(DEFAULT_FILE_STEM)
        .replace(['/', '\\'], "_");

    let summary = keywords
        .iter()
        .map(|k| NON_WORD.replace_all(k, "").into_owned())
        .collect::<Vec<_>>()
        .join(", ");

    if summary.is_empty() {
        base
    } else {
        format!("{base}_[{summary}]")
    }
}

/// Joins a directory, stem and the format's extension.
///
/// The extension is appended, never substituted, so stems containing dots
/// are kept intact.
pub fn export_path(dir: impl AsRef<Path>, stem: &str, format: OutputFormat) -> PathBuf {
    dir.as_ref().join(format!("{stem}.{}", format.extension()))
}
