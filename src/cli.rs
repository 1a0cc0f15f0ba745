//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - which export files to produce
//!
//! [`Args::filter_config`] layers the command-line switches over an optional
//! preset, producing the [`FilterConfig`] for one run.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::FilterConfig;
use crate::format::OutputFormat;

/// Filter a Telegram chat export and re-export it as compact JSON and/or
/// a plain-text transcript sized for an LLM context window.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgprettify")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgprettify result.json
    tgprettify result.json --exclude-forwarded --hide-from -k deploy,release
    tgprettify result.json --skip-empty -s 100 -f txt -o last_part
    tgprettify result.json -c preset.toml --dry-run")]
pub struct Args {
    /// Path to the Telegram JSON export
    pub input: PathBuf,

    /// Export filename without extension [default: derived from chat name and keywords]
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Directory for the exported files
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Which exports to write
    #[arg(short, long, value_enum, default_value = "both")]
    pub format: ExportFormat,

    /// Load filter options from a TOML preset; flags below are applied on top
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exclude forwarded messages
    #[arg(long)]
    pub exclude_forwarded: bool,

    /// Hide the 'from' field
    #[arg(long)]
    pub hide_from: bool,

    /// Hide senders in the text transcript
    #[arg(long)]
    pub hide_senders: bool,

    /// Hide message time
    #[arg(long)]
    pub hide_time: bool,

    /// Skip messages with empty text
    #[arg(long)]
    pub skip_empty: bool,

    /// Keep messages containing any of these keywords (comma separated)
    #[arg(short, long, value_name = "LIST")]
    pub keywords: Option<String>,

    /// Start from the Nth message that passes the other filters (0-based)
    #[arg(short, long, value_name = "N")]
    pub start_offset: Option<usize>,

    /// Report counts and size estimate without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Applies the command-line switches to `base`.
    ///
    /// Boolean switches only turn options on, `--keywords` adds to the
    /// preset's keywords and `--start-offset` replaces its offset.
    pub fn filter_config(&self, base: FilterConfig) -> FilterConfig {
        let mut config = base;
        config.exclude_forwarded |= self.exclude_forwarded;
        config.hide_from |= self.hide_from;
        config.hide_senders |= self.hide_senders;
        config.hide_time |= self.hide_time;
        config.skip_empty |= self.skip_empty;
        if let Some(list) = &self.keywords {
            config.keywords.extend(list.split(','));
        }
        if let Some(offset) = self.start_offset {
            config.start_offset = offset;
        }
        config
    }

    /// Maps `-v` occurrences to a default log filter.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Export selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON document only
    Json,

    /// Plain-text transcript only
    #[value(alias = "text")]
    Txt,

    /// Both files (default)
    #[default]
    Both,
}

impl ExportFormat {
    /// Returns the library formats to write, JSON first.
    pub fn formats(&self) -> &'static [OutputFormat] {
        match self {
            ExportFormat::Json => &[OutputFormat::Json],
            ExportFormat::Txt => &[OutputFormat::Text],
            ExportFormat::Both => &[OutputFormat::Json, OutputFormat::Text],
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Txt => write!(f, "TXT"),
            ExportFormat::Both => write!(f, "JSON + TXT"),
        }
    }
}
