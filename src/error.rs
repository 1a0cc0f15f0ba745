//! Unified error types for tgprettify.
//!
//! A single [`PrettifyError`] enum covers every failure the library can
//! report. Only document-level problems are errors: anything wrong with an
//! individual message (missing fields, odd text spans) degrades to empty or
//! absent values instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tgprettify operations.
///
/// # Example
///
/// ```rust
/// use tgprettify::error::Result;
/// use tgprettify::ChatDocument;
///
/// fn load() -> Result<ChatDocument> {
///     tgprettify::parser::parse_str(r#"{"messages": []}"#)
/// }
/// # assert!(load().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, PrettifyError>;

/// The error type for all tgprettify operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrettifyError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the input file doesn't exist or the
    /// export cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded document could not be parsed.
    ///
    /// Raised for malformed JSON and for JSON whose top level does not look
    /// like a chat export. Nothing from a failed load is retained.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A filter preset file could not be read as TOML.
    #[error("Invalid filter preset{}: {message}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    InvalidConfig {
        /// The preset path, if loaded from disk
        path: Option<PathBuf>,
        /// Description of what's wrong
        message: String,
    },

    /// An unknown output format was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Serializing an export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of document parse errors.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The input is not valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON with the wrong top-level shape
    #[error("{0}")]
    Structure(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PrettifyError {
    /// Creates a parse error for malformed Telegram JSON.
    pub fn telegram_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        PrettifyError::Parse {
            format: "Telegram JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a parse error for JSON with an unexpected structure.
    pub fn telegram_structure(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        PrettifyError::Parse {
            format: "Telegram JSON",
            source: ParseErrorKind::Structure(message.into()),
            path,
        }
    }

    /// Creates an invalid preset error.
    pub fn invalid_config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        PrettifyError::InvalidConfig {
            path,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PrettifyError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches a file path to a parse or preset error that lacks one.
    #[must_use]
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            PrettifyError::Parse {
                format,
                source,
                path: None,
            } => PrettifyError::Parse {
                format,
                source,
                path: Some(new_path.into()),
            },
            PrettifyError::InvalidConfig {
                path: None,
                message,
            } => PrettifyError::InvalidConfig {
                path: Some(new_path.into()),
                message,
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PrettifyError::Io(_))
    }

    /// Returns `true` if this is a document parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, PrettifyError::Parse { .. })
    }

    /// Returns `true` if this is a preset error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, PrettifyError::InvalidConfig { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PrettifyError::InvalidFormat { .. })
    }
}
