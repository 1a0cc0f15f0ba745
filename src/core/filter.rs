//! Filter messages and project the survivors.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for running the pipeline over a message sequence.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Forwarded | [`with_exclude_forwarded`](FilterConfig::with_exclude_forwarded) | Drop messages carrying `forwarded_from` |
//! | Empty | [`with_skip_empty`](FilterConfig::with_skip_empty) | Drop messages whose text is `""` |
//! | Keywords | [`with_keywords`](FilterConfig::with_keywords) | Keep messages containing any keyword |
//! | Offset | [`with_start_offset`](FilterConfig::with_start_offset) | Drop the first N candidates |
//!
//! The remaining options (`hide_from`, `hide_time`, `hide_senders`) only
//! change which fields are projected or rendered.
//!
//! # Examples
//!
//! ```
//! use tgprettify::core::filter::{FilterConfig, apply_filters};
//! use tgprettify::RawMessage;
//!
//! let messages = vec![
//!     RawMessage::new("Deploy is done").with_from("Alice"),
//!     RawMessage::new("lunch?").with_from("Bob"),
//!     RawMessage::new("deploy failed, rolling back").with_from("Alice"),
//! ];
//!
//! let config = FilterConfig::new().with_keywords("DEPLOY");
//! let records = apply_filters(&messages, &config);
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].text, "deploy failed, rolling back");
//! ```
//!
//! # Behavior Notes
//!
//! - Predicates are AND-combined and evaluated in order: forwarded, empty,
//!   keywords. The first failing one drops the message.
//! - Keyword matching is a case-insensitive substring test with OR semantics
//!   across keywords.
//! - The start offset counts *candidates*, i.e. messages that already passed
//!   every predicate, not positions in the raw document.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::models::{FilterStats, OutputConfig, ProjectionRecord};
use super::projector::project;
use crate::RawMessage;

/// Configuration for one filter application.
///
/// Built once, then only read. The same config applied to the same document
/// always yields the same records.
///
/// # Examples
///
/// ```
/// use tgprettify::core::filter::FilterConfig;
///
/// let config = FilterConfig::new()
///     .with_exclude_forwarded(true)
///     .with_hide_time(true)
///     .with_keywords("release, Deploy ,")
///     .with_start_offset(10);
///
/// assert_eq!(config.keywords.len(), 2);
/// assert!(config.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Drop messages that carry `forwarded_from`.
    pub exclude_forwarded: bool,

    /// Omit the `from` field from records.
    pub hide_from: bool,

    /// Render text bodies without the sender prefix.
    pub hide_senders: bool,

    /// Omit the `date` field from records.
    pub hide_time: bool,

    /// Drop messages whose normalized text is empty.
    pub skip_empty: bool,

    /// Keep only messages containing one of these. Empty matches everything.
    pub keywords: KeywordSet,

    /// Number of leading candidates to drop.
    pub start_offset: usize,
}

impl FilterConfig {
    /// Creates a configuration with every option off.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exclude_forwarded(mut self, exclude: bool) -> Self {
        self.exclude_forwarded = exclude;
        self
    }

    #[must_use]
    pub fn with_hide_from(mut self, hide: bool) -> Self {
        self.hide_from = hide;
        self
    }

    #[must_use]
    pub fn with_hide_senders(mut self, hide: bool) -> Self {
        self.hide_senders = hide;
        self
    }

    #[must_use]
    pub fn with_hide_time(mut self, hide: bool) -> Self {
        self.hide_time = hide;
        self
    }

    #[must_use]
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Sets keywords from a comma-separated list.
    ///
    /// Entries are trimmed and lowercased; blank entries are ignored.
    #[must_use]
    pub fn with_keywords(mut self, list: &str) -> Self {
        self.keywords = KeywordSet::parse(list);
        self
    }

    /// Sets keywords from an already-built set.
    #[must_use]
    pub fn with_keyword_set(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    /// Returns `true` if any option drops messages.
    pub fn is_active(&self) -> bool {
        self.exclude_forwarded
            || self.skip_empty
            || !self.keywords.is_empty()
            || self.start_offset > 0
    }

    /// Returns the rendering options for the text exporter.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new().with_hide_senders(self.hide_senders)
    }
}

/// Lowercase keywords with first-occurrence order.
///
/// Deserializes from either a comma-separated string or a list of strings;
/// both go through the same normalization.
///
/// ```
/// use tgprettify::core::filter::KeywordSet;
///
/// let set = KeywordSet::parse(" Rust,tokio, ,RUST ");
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["rust", "tokio"]);
/// assert!(set.matches("I love Tokio"));
/// assert!(!set.matches("python"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeywordInput", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordInput {
    List(Vec<String>),
    Csv(String),
}

impl From<KeywordInput> for KeywordSet {
    fn from(input: KeywordInput) -> Self {
        match input {
            KeywordInput::List(items) => items.into_iter().collect(),
            KeywordInput::Csv(list) => KeywordSet::parse(&list),
        }
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated keyword list.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Adds a keyword after trimming and lowercasing it.
    ///
    /// Blank and duplicate keywords are ignored.
    pub fn insert(&mut self, keyword: &str) {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !self.0.contains(&keyword) {
            self.0.push(keyword);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` if `text` contains any keyword, ignoring case.
    ///
    /// An empty set matches every text.
    pub fn matches(&self, text: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let folded = text.to_lowercase();
        self.0.iter().any(|k| folded.contains(k.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(keyword.as_ref());
        }
    }
}

/// Why a message left the pipeline before the offset slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Forwarded,
    Empty,
    NoKeyword,
}

/// Runs the predicate chain for one message.
///
/// Returns the normalized text when the message is a candidate.
pub fn admit(msg: &RawMessage, config: &FilterConfig) -> Result<String, Rejection> {
    if config.exclude_forwarded && msg.is_forwarded() {
        return Err(Rejection::Forwarded);
    }

    let text = msg.normalized_text();

    if config.skip_empty && text.is_empty() {
        return Err(Rejection::Empty);
    }

    if !config.keywords.matches(&text) {
        return Err(Rejection::NoKeyword);
    }

    Ok(text)
}

/// Filters and projects messages, preserving their order.
///
/// # Examples
///
/// ```
/// use tgprettify::core::filter::{FilterConfig, apply_filters};
/// use tgprettify::RawMessage;
///
/// let messages = vec![
///     RawMessage::new(""),
///     RawMessage::new("one"),
///     RawMessage::new("two"),
/// ];
///
/// // The empty message is gone before the offset is counted.
/// let config = FilterConfig::new().with_skip_empty(true).with_start_offset(1);
/// let records = apply_filters(&messages, &config);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].text, "two");
/// ```
pub fn apply_filters(messages: &[RawMessage], config: &FilterConfig) -> Vec<ProjectionRecord> {
    apply_filters_with_stats(messages, config).0
}

/// Same as [`apply_filters`], also reporting how many messages each stage dropped.
pub fn apply_filters_with_stats(
    messages: &[RawMessage],
    config: &FilterConfig,
) -> (Vec<ProjectionRecord>, FilterStats) {
    let mut stats = FilterStats {
        input: messages.len(),
        ..FilterStats::default()
    };

    let records: Vec<ProjectionRecord> = messages
        .iter()
        .enumerate()
        .filter_map(|(index, msg)| match admit(msg, config) {
            Ok(text) => {
                stats.candidates += 1;
                Some((msg, text))
            }
            Err(reason) => {
                trace!(index, ?reason, "message dropped");
                stats.record(reason);
                None
            }
        })
        .skip(config.start_offset)
        .map(|(msg, text)| project(msg, text, config))
        .collect();

    stats.offset_skipped = stats.candidates - records.len();
    stats.output = records.len();

    debug!(
        input = stats.input,
        forwarded = stats.forwarded,
        empty = stats.empty,
        keyword = stats.keyword,
        candidates = stats.candidates,
        offset_skipped = stats.offset_skipped,
        output = stats.output,
        "filters applied"
    );

    (records, stats)
}
