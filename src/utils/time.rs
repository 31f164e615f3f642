//! Elapsed-time and timestamp formatting for report output.

use chrono::{DateTime, Local};

/// Format elapsed seconds as HH:MM:SS (e.g. "02:35:42").
pub fn format_elapsed(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Compact duration (e.g. "2h 35m", "45m 10s", "30s").
pub fn format_short(seconds: i64) -> String {
    let s = seconds.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let secs = s % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

fn local_datetime(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(&Local))
}

/// Unix timestamp → "YYYY-MM-DD HH:MM:SS" in local time.
pub fn format_datetime_full(timestamp: i64) -> String {
    match local_datetime(timestamp) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "--".to_string(),
    }
}

/// Unix timestamp → "MM/DD HH:MM" in local time.
pub fn format_datetime_short(timestamp: i64) -> String {
    match local_datetime(timestamp) {
        Some(dt) => dt.format("%m/%d %H:%M").to_string(),
        None => "--".to_string(),
    }
}
