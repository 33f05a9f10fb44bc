//! Timestamp formatting utilities
//!
//! Each output profile renders the record time with a fixed layout.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layouts used by the output profiles
///
/// # Examples
///
/// ```
/// use rust_logops::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Rfc3339.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45Z`
    ///
    /// Used by the JSON profile.
    #[default]
    Rfc3339,

    /// Wall-clock time with milliseconds: `10:30:45.123`
    ///
    /// Used by the text profile.
    TimeOfDayMillis,
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this layout
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::TimeOfDayMillis => datetime.format("%H:%M:%S%.3f").to_string(),
        }
    }

    /// Parse a timestamp produced by [`TimestampFormat::Rfc3339`]
    pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
