//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use moodlog_core::DayZone;
use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First 8 characters of a UUID.
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Format a timestamp in the journal's day zone.
///
/// Pretty output shows local wall time; plain output is RFC 3339 in UTC.
pub fn format_timestamp(ts: &DateTime<Utc>, zone: &DayZone, pretty: bool) -> String {
    if !pretty {
        return ts.to_rfc3339();
    }
    match zone {
        DayZone::Local => ts
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        DayZone::Named(tz) => ts.with_timezone(tz).format("%Y-%m-%d %H:%M %Z").to_string(),
    }
}

/// Replace newlines with spaces for single-line output.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Horizontal bar for a share in `[0, 1]`.
pub fn share_bar(share: f64, width: usize, unicode: bool) -> String {
    let filled = (share.clamp(0.0, 1.0) * width as f64).round() as usize;
    let (full, empty) = if unicode {
        ("\u{2588}", "\u{2591}")
    } else {
        ("#", ".")
    };
    format!("{}{}", full.repeat(filled), empty.repeat(width - filled))
}
