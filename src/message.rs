//! Raw message records as they appear in a Telegram export.
//!
//! [`RawMessage`] keeps only the attributes the pipeline reads. Every field is
//! optional and extraction is best-effort: a value of the wrong JSON type is
//! treated as if the key were missing, so a single odd record never fails the
//! whole document.
//!
//! # Examples
//!
//! ```
//! use tgprettify::RawMessage;
//!
//! let msg: RawMessage = serde_json::from_str(
//!     r#"{"id": 7, "type": "message", "date": "2024-01-15T10:30:00", "from": "Alice", "text": "Hello"}"#,
//! )?;
//! assert_eq!(msg.from(), Some("Alice"));
//! assert_eq!(msg.normalized_text(), "Hello");
//! assert!(!msg.is_forwarded());
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::parsing::normalize_text;

/// A single message record from the source document.
///
/// | Field | Missing / `null` | Wrong type |
/// |-------|------------------|------------|
/// | `text` | `None` | kept, normalizes to `""` |
/// | `date` | `None` | `None` |
/// | `from` | `None` | `None` |
/// | `forwarded_from` | `None` / `Some("")` | `Some("")` |
///
/// `forwarded_from` is presence-significant: Telegram writes
/// `"forwarded_from": null` for forwards from hidden accounts, and such a
/// message is still a forward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Plain string or an array of rich-text spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,

    /// Timestamp string, kept verbatim.
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    /// Sender display name.
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<String>,

    /// Original-source label of a forwarded message.
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub forwarded_from: Option<String>,
}

impl RawMessage {
    /// Creates a message with plain-string text and no other fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
            ..Self::default()
        }
    }

    /// Builds a message from one element of the `messages` array.
    ///
    /// Elements that are not JSON objects become an empty message.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Replaces the text with a raw JSON value (string or span array).
    #[must_use]
    pub fn with_text_value(mut self, text: Value) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    #[must_use]
    pub fn with_forwarded_from(mut self, source: impl Into<String>) -> Self {
        self.forwarded_from = Some(source.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the raw `text` value.
    pub fn text_value(&self) -> Option<&Value> {
        self.text.as_ref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn forwarded_from(&self) -> Option<&str> {
        self.forwarded_from.as_deref()
    }

    /// Returns `true` if the record carries `forwarded_from`, even an empty one.
    pub fn is_forwarded(&self) -> bool {
        self.forwarded_from.is_some()
    }

    /// Returns the text flattened to a single plain string.
    pub fn normalized_text(&self) -> String {
        normalize_text(self.text.as_ref())
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => Some(String::new()),
    })
}
