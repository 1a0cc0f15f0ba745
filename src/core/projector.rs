//! Field selection for surviving messages.

use super::filter::FilterConfig;
use super::models::ProjectionRecord;
use crate::RawMessage;

/// Builds the output record for one candidate.
///
/// - `text` is always set to the normalized text.
/// - `date` and `from` are copied verbatim (empty when missing) unless hidden.
/// - `forwarded_from` is kept whenever the message carries it. Forwards are
///   only ever removed by the filter stage, and `hide_senders` affects
///   rendering only.
///
/// ```
/// use tgprettify::core::filter::FilterConfig;
/// use tgprettify::core::projector::project;
/// use tgprettify::RawMessage;
///
/// let msg = RawMessage::new("hi").with_from("Alice");
/// let record = project(&msg, msg.normalized_text(), &FilterConfig::new());
///
/// assert_eq!(record.from.as_deref(), Some("Alice"));
/// assert_eq!(record.date.as_deref(), Some(""));
/// ```
pub fn project(msg: &RawMessage, text: String, config: &FilterConfig) -> ProjectionRecord {
    ProjectionRecord {
        text,
        date: (!config.hide_time).then(|| msg.date().unwrap_or_default().to_string()),
        from: (!config.hide_from).then(|| msg.from().unwrap_or_default().to_string()),
        forwarded_from: msg.forwarded_from().map(ToString::to_string),
    }
}
