//! Filter presets stored as TOML.
//!
//! A preset holds the same keys as [`FilterConfig`]; every key is optional
//! and defaults to "off". `keywords` may be written as a comma-separated
//! string or as an array.
//!
//! ```toml
//! exclude_forwarded = true
//! hide_time = true
//! keywords = "release, deploy"
//! start_offset = 20
//! ```
//!
//! # Example
//!
//! ```rust
//! use tgprettify::config::from_toml_str;
//!
//! let config = from_toml_str("skip_empty = true\nkeywords = [\"Rust\"]")?;
//! assert!(config.skip_empty);
//! assert!(config.keywords.matches("rustacean"));
//! # Ok::<(), tgprettify::PrettifyError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::FilterConfig;
use crate::error::{PrettifyError, Result};

/// Parses a preset from TOML text.
pub fn from_toml_str(content: &str) -> Result<FilterConfig> {
    toml::from_str(content).map_err(|e| PrettifyError::invalid_config(e.message(), None))
}

/// Reads a preset file.
pub fn load_preset(path: &Path) -> Result<FilterConfig> {
    let content = fs::read_to_string(path)?;
    let config = from_toml_str(&content).map_err(|e| e.with_path(path))?;
    debug!(path = %path.display(), ?config, "loaded filter preset");
    Ok(config)
}

/// Serializes a configuration as a preset.
pub fn to_toml_string(config: &FilterConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| PrettifyError::invalid_config(e.to_string(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_preset_is_default() {
        assert_eq!(from_toml_str("").unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_full_preset() {
        let config = from_toml_str(
            r#"
exclude_forwarded = true
hide_from = true
hide_senders = true
hide_time = true
skip_empty = true
keywords = "Alpha, beta"
start_offset = 3
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            FilterConfig::new()
                .with_exclude_forwarded(true)
                .with_hide_from(true)
                .with_hide_senders(true)
                .with_hide_time(true)
                .with_skip_empty(true)
                .with_keywords("alpha,beta")
                .with_start_offset(3)
        );
    }

    #[test]
    fn test_keywords_as_array() {
        let config = from_toml_str(r#"keywords = [" One ", "two", ""]"#).unwrap();
        assert_eq!(config.keywords.iter().collect::<Vec<_>>(), ["one", "two"]);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let err = from_toml_str("start_offset = -1").unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = from_toml_str("skip_empty = \"yes\"").unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_round_trip() {
        let config = FilterConfig::new()
            .with_hide_time(true)
            .with_keywords("a,b")
            .with_start_offset(2);
        let toml = to_toml_string(&config).unwrap();
        assert_eq!(from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_load_preset_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "exclude_forwarded = true").unwrap();
        let config = load_preset(file.path()).unwrap();
        assert!(config.exclude_forwarded);
    }

    #[test]
    fn test_load_preset_error_mentions_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml").unwrap();
        let err = load_preset(file.path()).unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
