//! Plain-text transcript writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::core::models::{FilteredResult, OutputConfig, ProjectionRecord};
use crate::error::Result;

/// Writes the result as a plain-text transcript.
pub fn write_text(
    result: &FilteredResult,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let text = to_text(result, config);
    let mut file = File::create(output_path)?;
    file.write_all(text.as_bytes())?;
    debug!(path = %output_path.display(), bytes = text.len(), "wrote text export");
    Ok(())
}

/// Renders the result as a plain-text transcript.
///
/// # Format
///
/// Each record becomes one block followed by a blank line:
///
/// ```text
/// 2024-01-15T10:30:00
/// Alice: Hello
///
/// 2024-01-15T10:31:00
/// Bob [Forwarded from: News]: Look at this
///
/// ```
///
/// - The date line appears only when the record has a non-empty date.
/// - With a sender shown: `<from>[ [Forwarded from: <src>]]: <text>`.
/// - With `from` absent or senders hidden: `[ [Forwarded from: <src>] ]<text>`.
pub fn to_text(result: &FilteredResult, config: &OutputConfig) -> String {
    let mut out = String::new();
    for record in &result.records {
        push_block(&mut out, record, config);
    }
    out
}

fn push_block(out: &mut String, record: &ProjectionRecord, config: &OutputConfig) {
    if let Some(date) = record.date.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(date);
        out.push('\n');
    }

    let forwarded = record
        .forwarded_from
        .as_deref()
        .map(|src| format!(" [Forwarded from: {src}]"));

    match record.from.as_deref() {
        Some(from) if !config.hide_senders => {
            out.push_str(from);
            if let Some(annotation) = &forwarded {
                out.push_str(annotation);
            }
            out.push_str(": ");
        }
        _ => {
            if let Some(annotation) = &forwarded {
                out.push_str(annotation);
                out.push(' ');
            }
        }
    }

    out.push_str(&record.text);
    out.push_str("\n\n");
}
