//! Parsing free-text `HH:mm:ss` input into an epoch-millisecond timestamp.
//!
//! The input is resolved against a local calendar date, matching how the
//! row editor fills in a time for "today". Parsing is pure and synchronous;
//! callers wanting the canonical silent-rejection behavior just discard the
//! error.

use chrono::{Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use thiserror::Error;

/// Reasons a wall-clock string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input did not split into exactly three `:`-separated parts.
    #[error("expected HH:mm:ss, got {input:?}")]
    Format { input: String },

    /// One of the parts was not a number.
    #[error("not a number in time input: {part:?}")]
    NotANumber { part: String },

    /// The numbers did not name a wall-clock time on the given date
    /// (component out of range, or a local time skipped by DST).
    #[error("no such wall-clock time: {input:?}")]
    NoSuchTime { input: String },
}

/// Parses `HH:mm:ss` as a local time on `date`, returning epoch milliseconds.
pub fn parse_clock_time(input: &str, date: NaiveDate) -> Result<i64, TimeParseError> {
    let parts: Vec<&str> = input.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(TimeParseError::Format {
            input: input.to_string(),
        });
    };

    let parse_part = |part: &&str| -> Result<u32, TimeParseError> {
        part.trim().parse().map_err(|_| TimeParseError::NotANumber {
            part: (*part).to_string(),
        })
    };
    let hours = parse_part(hours)?;
    let minutes = parse_part(minutes)?;
    let seconds = parse_part(seconds)?;

    let Some(time) = NaiveTime::from_hms_opt(hours, minutes, seconds) else {
        return Err(TimeParseError::NoSuchTime {
            input: input.to_string(),
        });
    };

    match Local.from_local_datetime(&date.and_time(time)) {
        // Ambiguous (DST fall-back): use the earlier time
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.timestamp_millis()),
        LocalResult::None => Err(TimeParseError::NoSuchTime {
            input: input.to_string(),
        }),
    }
}

/// Parses `HH:mm:ss` against today's local date.
pub fn parse_clock_time_today(input: &str) -> Result<i64, TimeParseError> {
    parse_clock_time(input, Local::now().date_naive())
}
