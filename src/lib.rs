//! # tgprettify
//!
//! Filter a Telegram Desktop chat export and re-export the surviving
//! messages as compact JSON or as a plain-text transcript small enough to
//! paste into an LLM context window.
//!
//! ## Overview
//!
//! A run has three stages:
//! 1. **Load** the export ([`parser`]) into a [`ChatDocument`]
//! 2. **Filter and project** the messages ([`core::filter`], [`core::projector`])
//! 3. **Export** the result ([`core::output`], [`format`])
//!
//! The loaded document is never modified, so any number of filter
//! configurations can be applied to it in turn.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tgprettify::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let doc = parser::parse("result.json".as_ref())?;
//!
//!     let config = FilterConfig::new()
//!         .with_exclude_forwarded(true)
//!         .with_keywords("release, deploy");
//!     let result = process(&doc, &config);
//!
//!     println!("Filtered to {} messages", result.len());
//!     write_json(&result, "release.json")?;
//!     write_text(&result, "release.txt", &config.output_config())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - Loading exports into a [`ChatDocument`]
//! - [`parsing`] - Rich-text flattening shared by the filter
//! - [`message`] - [`RawMessage`], one export entry
//! - [`document`] - [`ChatDocument`], the loaded export
//! - [`core`] - Filtering, projection, estimation and exporters
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and export file naming
//! - `config` - TOML filter presets (feature `presets`)
//! - `cli` - Command-line arguments (feature `cli`)
//! - [`error`] - [`PrettifyError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "presets")]
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use document::ChatDocument;
pub use error::{PrettifyError, Result};
pub use message::RawMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tgprettify::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatDocument, RawMessage};

    pub use crate::error::{PrettifyError, Result};

    pub use crate::parser;

    pub use crate::core::filter::{FilterConfig, KeywordSet, apply_filters};
    pub use crate::core::models::{FilteredResult, OutputConfig, ProjectionRecord, SizeEstimate};
    pub use crate::core::processor::{estimate, process};
    pub use crate::core::output::{to_json, to_text, write_json, write_text};

    pub use crate::format::{OutputFormat, default_file_stem, export_path, write_to_format};
}
