//! Document loader for Telegram JSON exports.
//!
//! Telegram Desktop exports chats as JSON with the following structure:
//!
//! ```json
//! {
//!   "name": "Chat Name",
//!   "messages": [
//!     {
//!       "id": 12345,
//!       "type": "message",
//!       "date": "2024-01-15T10:30:00",
//!       "from": "Sender Name",
//!       "forwarded_from": "Some Channel",
//!       "text": "Hello" | ["Hello", {"type": "link", "text": "url"}]
//!     }
//!   ]
//! }
//! ```
//!
//! Only the top-level shape is validated. `name` and `messages` are both
//! optional; anything inside a message is extracted best-effort.
//!
//! # Example
//!
//! ```rust
//! use tgprettify::parser;
//!
//! let doc = parser::parse_str(r#"{"name": "T", "messages": [{"text": "hi"}]}"#)?;
//! assert_eq!(doc.display_name(), "T");
//! assert_eq!(doc.len(), 1);
//! # Ok::<(), tgprettify::PrettifyError>(())
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{PrettifyError, Result};
use crate::{ChatDocument, RawMessage};

/// Reads and parses an export file.
///
/// Parse errors carry the file path.
pub fn parse(path: &Path) -> Result<ChatDocument> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export");
    parse_bytes(&bytes).map_err(|e| e.with_path(path))
}

/// Parses an export held in memory.
pub fn parse_str(content: &str) -> Result<ChatDocument> {
    parse_bytes(content.as_bytes())
}

/// Parses an export from raw bytes, as received from an upload.
pub fn parse_bytes(bytes: &[u8]) -> Result<ChatDocument> {
    let root: Value =
        serde_json::from_slice(bytes).map_err(|e| PrettifyError::telegram_parse(e, None))?;
    from_value(root)
}

/// Builds a document from an already-parsed JSON value.
pub fn from_value(root: Value) -> Result<ChatDocument> {
    let Value::Object(mut root) = root else {
        return Err(PrettifyError::telegram_structure(
            format!("expected a JSON object at the top level, found {}", kind_of(&root)),
            None,
        ));
    };

    let name = match root.remove("name") {
        Some(Value::String(name)) => Some(name),
        _ => None,
    };

    let messages = match root.remove("messages") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(RawMessage::from_value).collect(),
        Some(other) => {
            return Err(PrettifyError::telegram_structure(
                format!("\"messages\" must be an array, found {}", kind_of(&other)),
                None,
            ));
        }
    };

    let doc = ChatDocument::new(name, messages);
    debug!(
        name = doc.display_name(),
        messages = doc.len(),
        forwarded = doc.forwarded_count(),
        "loaded chat document"
    );
    Ok(doc)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
