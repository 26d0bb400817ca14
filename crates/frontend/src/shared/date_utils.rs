//! Utilities for date and time formatting
//!
//! Creation timestamps are rendered in UTC.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Format a UTC instant with a strftime pattern.
/// Returns `None` if the pattern is malformed.
/// Example: 2020-09-13T12:26:40Z with "%b %-d, %Y" -> "Sep 13, 2020"
pub fn format_datetime_utc(dt: DateTime<Utc>, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}
