//! Telegram rich-text normalization.
//!
//! The `text` field in Telegram exports can be:
//! - A simple string: `"Hello"`
//! - An array with strings and span objects:
//!   `["See ", {"type": "link", "text": "https://example.com"}, "!"]`
//!
//! Both shapes flatten to a single plain string. Unknown shapes contribute
//! nothing instead of failing.

use serde_json::Value;

/// Flattens an optional raw `text` value into plain text.
///
/// A missing or `null` value yields an empty string.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use tgprettify::parsing::normalize_text;
///
/// let spans = json!(["foo", {"type": "bold", "text": "bar"}]);
/// assert_eq!(normalize_text(Some(&spans)), "foobar");
/// assert_eq!(normalize_text(None), "");
/// ```
pub fn normalize_text(text_value: Option<&Value>) -> String {
    text_value.map(extract_telegram_text).unwrap_or_default()
}

/// Extracts text content from Telegram's `text` field.
///
/// Span order is preserved and no separators are inserted. Array entries
/// that are neither strings nor objects with a string `text` attribute are
/// skipped.
pub fn extract_telegram_text(text_value: &Value) -> String {
    match text_value {
        Value::String(s) => s.clone(),
        Value::Array(spans) => {
            let mut out = String::new();
            for span in spans {
                match span {
                    Value::String(s) => out.push_str(s),
                    Value::Object(obj) => {
                        if let Some(Value::String(s)) = obj.get("text") {
                            out.push_str(s);
                        }
                    }
                    _ => {}
                }
            }
            out
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_string() {
        let value = json!("Hello world");
        assert_eq!(extract_telegram_text(&value), "Hello world");
    }

    #[test]
    fn test_extract_text_array_with_link() {
        let value = json!([
            "Check this: ",
            {"type": "link", "text": "https://example.com"},
            " cool!"
        ]);
        assert_eq!(
            extract_telegram_text(&value),
            "Check this: https://example.com cool!"
        );
    }

    #[test]
    fn test_extract_text_mixed_spans() {
        let value = json!(["foo", {"text": "bar", "type": "bold"}]);
        assert_eq!(extract_telegram_text(&value), "foobar");
    }

    #[test]
    fn test_extract_text_skips_shapeless_spans() {
        let value = json!([
            "a",
            {"type": "custom_emoji", "document_id": "123"},
            42,
            null,
            {"text": 7},
            ["nested"],
            "b"
        ]);
        assert_eq!(extract_telegram_text(&value), "ab");
    }

    #[test]
    fn test_extract_text_empty_array() {
        assert_eq!(extract_telegram_text(&json!([])), "");
    }

    #[test]
    fn test_extract_text_null_and_scalars() {
        assert_eq!(extract_telegram_text(&json!(null)), "");
        assert_eq!(extract_telegram_text(&json!(12)), "");
        assert_eq!(extract_telegram_text(&json!({"text": "obj"})), "");
    }

    #[test]
    fn test_normalize_absent() {
        assert_eq!(normalize_text(None), "");
    }

    #[test]
    fn test_normalize_preserves_string_verbatim() {
        let value = json!("  spaced\nlines  ");
        assert_eq!(normalize_text(Some(&value)), "  spaced\nlines  ");
    }
}
