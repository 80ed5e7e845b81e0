//! # Time Utilities
//!
//! Wall-clock helpers using chrono. Timestamps are local system time; no
//! timezone normalization is applied.

use chrono::{DateTime, Local, SecondsFormat};

/// Get the current local time.
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Format a timestamp as ISO-8601 (RFC 3339) with microsecond precision.
pub fn format_iso(time: DateTime<Local>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, false)
}
