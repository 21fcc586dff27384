use chrono::{DateTime, Local, Utc};

/// Format when a history entry was recorded, relative to `now`:
/// - "just now" under 10 seconds
/// - "42s ago", "5m ago", "3h ago" within a day
/// - local wall-clock time ("2024-03-09 14:05") beyond that
pub fn format_recorded_at(recorded_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*recorded_at).num_seconds().max(0);

    if seconds < 10 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else {
        recorded_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
    }
}
