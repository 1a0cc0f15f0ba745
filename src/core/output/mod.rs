//! Export writers.
//!
//! This module provides the two export encodings:
//! - [`write_json`] / [`to_json`] - `{"name": ..., "messages": [...]}`, pretty-printed
//! - [`write_text`] / [`to_text`] - a plain-text transcript, one block per message
//!
//! Both are deterministic: the same result always renders to the same bytes.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> tgprettify::Result<()> {
//! use tgprettify::core::output::{to_text, write_json, write_text};
//! use tgprettify::core::{FilterConfig, process};
//! use tgprettify::parser;
//!
//! let doc = parser::parse(std::path::Path::new("result.json"))?;
//! let config = FilterConfig::new().with_skip_empty(true);
//! let result = process(&doc, &config);
//!
//! // Write to files
//! write_json(&result, "chat.json")?;
//! write_text(&result, "chat.txt", &config.output_config())?;
//!
//! // Or get as a string
//! let transcript = to_text(&result, &config.output_config());
//! # Ok(())
//! # }
//! ```

mod json_writer;
mod text_writer;

pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
