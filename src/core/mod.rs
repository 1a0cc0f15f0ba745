//! Core processing logic for tgprettify.
//!
//! This module contains:
//! - [`filter`] - Filter configuration and the predicate pipeline
//! - [`projector`] - Field selection for surviving messages
//! - [`models`] - Records, results and rendering options
//! - [`processor`] - Size estimation and the end-to-end pipeline
//! - [`output`] - JSON and text exporters
//!
//! # Quick Start
//!
//! ```rust
//! use tgprettify::core::{FilterConfig, process, to_json, to_text};
//! use tgprettify::parser;
//!
//! # fn main() -> tgprettify::Result<()> {
//! let doc = parser::parse_str(r#"{"name": "T", "messages": [{"text": "hi", "from": "A"}]}"#)?;
//! let config = FilterConfig::new().with_hide_time(true);
//! let result = process(&doc, &config);
//!
//! let json = to_json(&result)?;
//! let text = to_text(&result, &config.output_config());
//! assert_eq!(text, "A: hi\n\n");
//! # let _ = json;
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;
pub mod projector;

// Re-export main types for convenience
pub use filter::{FilterConfig, KeywordSet, apply_filters, apply_filters_with_stats};
pub use models::{FilterStats, FilteredResult, OutputConfig, ProjectionRecord, SizeEstimate};
pub use output::{to_json, to_text, write_json, write_text};
pub use processor::{estimate, process};
pub use projector::project;
