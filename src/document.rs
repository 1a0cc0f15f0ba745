//! The loaded chat export.

use crate::RawMessage;

/// Name used in exports when the document has none.
pub const DEFAULT_CHAT_NAME: &str = "Unknown chat";

/// Root of a Telegram export: an optional title and the ordered messages.
///
/// Message order is export order and is preserved by every pipeline stage.
/// The pipeline only ever borrows a document, so the same value can be
/// filtered any number of times with different configurations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatDocument {
    /// Chat title, if the export carries one.
    pub name: Option<String>,
    /// Messages in export order.
    pub messages: Vec<RawMessage>,
}

impl ChatDocument {
    pub fn new(name: Option<String>, messages: Vec<RawMessage>) -> Self {
        Self { name, messages }
    }

    /// Returns the chat title or [`DEFAULT_CHAT_NAME`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_CHAT_NAME)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Counts messages carrying `forwarded_from`.
    pub fn forwarded_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_forwarded()).count()
    }
}
