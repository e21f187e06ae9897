//! Small helpers shared by the commands.

use chrono::{Local, TimeZone};

/// Placeholder shown for rows that have no timestamp yet.
pub const UNTIMED: &str = "--:--:--";

/// Formats an epoch-millisecond timestamp as local `HH:mm:ss`.
#[must_use]
pub fn format_clock(time_ms: Option<i64>) -> String {
    time_ms.map_or_else(
        || UNTIMED.to_string(),
        |ms| match Local.timestamp_millis_opt(ms) {
            chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
                dt.format("%H:%M:%S").to_string()
            }
            chrono::LocalResult::None => UNTIMED.to_string(),
        },
    )
}
