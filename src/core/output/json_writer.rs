//! JSON export writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::models::{FilteredResult, ProjectionRecord};
use crate::error::Result;

/// Shape of the exported document.
#[derive(Serialize)]
struct JsonExport<'a> {
    name: &'a str,
    messages: &'a [ProjectionRecord],
}

/// Writes the result to a JSON file.
///
/// # Format
/// ```json
/// {
///   "name": "Chat Name",
///   "messages": [
///     {
///       "text": "Hello",
///       "date": "2024-01-15T10:30:00",
///       "from": "Alice"
///     }
///   ]
/// }
/// ```
pub fn write_json(result: &FilteredResult, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(result)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    debug!(path = %output_path.display(), bytes = json.len(), "wrote JSON export");
    Ok(())
}

/// Converts the result to a pretty-printed JSON string.
///
/// Same format as [`write_json`]. Non-ASCII text is written literally and
/// absent fields are omitted rather than written as `null`.
pub fn to_json(result: &FilteredResult) -> Result<String> {
    let export = JsonExport {
        name: &result.name,
        messages: &result.records,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_result() -> FilteredResult {
        FilteredResult {
            name: "T".into(),
            records: vec![
                ProjectionRecord::new("hi").with_date("d1").with_from("A"),
                ProjectionRecord::new("yo").with_forwarded_from("C"),
            ],
            ..FilteredResult::default()
        }
    }

    #[test]
    fn test_to_json_layout() {
        let json = to_json(&sample_result()).unwrap();
        let expected = r#"{
  "name": "T",
  "messages": [
    {
      "text": "hi",
      "date": "d1",
      "from": "A"
    },
    {
      "text": "yo",
      "forwarded_from": "C"
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_to_json_empty_messages() {
        let result = FilteredResult {
            name: "Unknown chat".into(),
            ..FilteredResult::default()
        };
        let json = to_json(&result).unwrap();
        assert!(json.contains(r#""messages": []"#));
    }

    #[test]
    fn test_to_json_non_ascii_literal() {
        let result = FilteredResult {
            name: "Чат".into(),
            records: vec![ProjectionRecord::new("Привет 🎉")],
            ..FilteredResult::default()
        };
        let json = to_json(&result).unwrap();
        assert!(json.contains("Привет 🎉"));
        assert!(json.contains(r#""name": "Чат""#));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_json() {
        let file = NamedTempFile::new().unwrap();
        write_json(&sample_result(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, to_json(&sample_result()).unwrap());
    }
}
