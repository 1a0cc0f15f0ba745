//! Size estimation and the end-to-end pipeline.

use tracing::debug;

use super::filter::{FilterConfig, apply_filters_with_stats};
use super::models::{FilteredResult, ProjectionRecord, SizeEstimate};
use crate::ChatDocument;

/// Estimates how much of a context window the records will take.
///
/// Counts characters of every visible field: `text` always, `from` and
/// `date` when the record carries them (i.e. when they are not hidden).
/// `forwarded_from` is not counted. Tokens are approximated as four
/// characters each.
///
/// # Example
///
/// ```
/// use tgprettify::core::models::ProjectionRecord;
/// use tgprettify::core::processor::estimate;
///
/// let records = vec![
///     ProjectionRecord::new("hello").with_from("Al"),
///     ProjectionRecord::new("world!").with_date("d1"),
/// ];
/// let est = estimate(&records);
/// assert_eq!(est.char_count, 5 + 2 + 6 + 2);
/// assert_eq!(est.approx_tokens, 3);
/// ```
pub fn estimate(records: &[ProjectionRecord]) -> SizeEstimate {
    let char_count = records
        .iter()
        .map(|r| {
            let text = r.text.chars().count();
            let from = r.from.as_deref().map_or(0, |f| f.chars().count());
            let date = r.date.as_deref().map_or(0, |d| d.chars().count());
            text + from + date
        })
        .sum();

    SizeEstimate::from_chars(char_count)
}

/// Runs one full filter application over a document.
///
/// The document is only borrowed; calling this again with another config
/// never sees results from earlier runs.
///
/// # Example
///
/// ```
/// use tgprettify::core::filter::FilterConfig;
/// use tgprettify::core::processor::process;
/// use tgprettify::parser;
///
/// let doc = parser::parse_str(r#"{"name": "T", "messages": [{"text": "hi", "from": "A"}]}"#)?;
/// let result = process(&doc, &FilterConfig::new().with_hide_time(true));
///
/// assert_eq!(result.name, "T");
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.estimate.char_count, 3);
/// # Ok::<(), tgprettify::PrettifyError>(())
/// ```
pub fn process(document: &ChatDocument, config: &FilterConfig) -> FilteredResult {
    let (records, stats) = apply_filters_with_stats(&document.messages, config);
    let estimate = estimate(&records);

    debug!(
        records = records.len(),
        chars = estimate.char_count,
        tokens = estimate.approx_tokens,
        "processed document"
    );

    FilteredResult {
        name: document.display_name().to_string(),
        records,
        estimate,
        stats,
    }
}
