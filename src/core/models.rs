//! Core data models for filtered output.

use serde::{Deserialize, Serialize};

use super::filter::Rejection;

/// One surviving message, reduced to the requested fields.
///
/// A `None` field is absent from every export, which is different from a
/// present empty string: `date: Some("")` still produces a `"date": ""` key.
/// Field order matches serialization order: `text`, `date`, `from`,
/// `forwarded_from`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    /// Normalized message text, always present.
    pub text: String,
    /// Raw date, present unless time is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Raw sender, present unless `from` is hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Forward source, present iff the source message carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded_from: Option<String>,
}

impl ProjectionRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
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
}

/// Approximate size of a filtered result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeEstimate {
    /// Characters across every visible `text`, `from` and `date` value.
    pub char_count: usize,
    /// `char_count / 4`.
    pub approx_tokens: usize,
}

impl SizeEstimate {
    pub fn from_chars(char_count: usize) -> Self {
        Self {
            char_count,
            approx_tokens: char_count / 4,
        }
    }
}

/// Per-stage message counts of one filter application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Messages in the document.
    pub input: usize,
    /// Dropped as forwarded.
    pub forwarded: usize,
    /// Dropped as empty.
    pub empty: usize,
    /// Dropped for matching no keyword.
    pub keyword: usize,
    /// Messages that passed every predicate.
    pub candidates: usize,
    /// Candidates dropped by the start offset.
    pub offset_skipped: usize,
    /// Records produced.
    pub output: usize,
}

impl FilterStats {
    pub(crate) fn record(&mut self, reason: Rejection) {
        match reason {
            Rejection::Forwarded => self.forwarded += 1,
            Rejection::Empty => self.empty += 1,
            Rejection::NoKeyword => self.keyword += 1,
        }
    }
}

/// Terminal output of one filter application.
///
/// Created fresh on every run and handed to the exporters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredResult {
    /// Chat title for the JSON export, defaulted when the document has none.
    pub name: String,
    /// Surviving records in document order.
    pub records: Vec<ProjectionRecord>,
    pub estimate: SizeEstimate,
    pub stats: FilterStats,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Rendering options for the text export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Drop the `"<from>: "` prefix even when `from` is present.
    pub hide_senders: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hide_senders(mut self, hide: bool) -> Self {
        self.hide_senders = hide;
        self
    }
}
