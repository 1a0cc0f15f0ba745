//! Shared parsing utilities.
//!
//! Telegram is the only supported export format; its text handling lives in
//! [`telegram`].

pub mod telegram;

pub use telegram::{extract_telegram_text, normalize_text};
