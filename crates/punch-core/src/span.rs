//! Elapsed-time spans between consecutive checkpoints.

use std::fmt::Write;

use crate::entry::WorkEntry;

/// A duration decomposed into whole hours, whole minutes and fractional
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Span {
    /// The zero span.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0.0,
    };

    /// Decomposes a millisecond duration into hour/minute/second components.
    ///
    /// The minute and hour components are only computed once the total
    /// exceeds the lower-unit remainder, so degenerate zero or negative
    /// inputs never produce non-zero higher units.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_millis(millis: i64) -> Self {
        let total = millis as f64 / 1000.0;
        let seconds = total % 60.0;
        let minutes = if total > seconds {
            ((total - seconds) / 60.0) % 60.0
        } else {
            0.0
        };
        let hours = if total > total % 3600.0 {
            total / 3600.0
        } else {
            0.0
        };
        Self {
            hours: hours.floor() as u32,
            minutes: minutes.floor() as u32,
            seconds,
        }
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0.0
    }
}

/// Elapsed time at `index` since the immediately preceding entry.
///
/// Zero for the first entry, for indices outside the log, when either
/// timestamp is missing, and when the timestamps run backwards (the log is
/// user-editable, so monotonicity is never assumed).
#[must_use]
pub fn span_at(entries: &[WorkEntry], index: usize) -> Span {
    if index == 0 || index >= entries.len() {
        return Span::ZERO;
    }
    let (Some(curr), Some(prev)) = (entries[index].time, entries[index - 1].time) else {
        return Span::ZERO;
    };
    if curr < prev {
        return Span::ZERO;
    }
    Span::from_millis(curr - prev)
}

/// Renders a span as `"H 小时 M 分钟 S 秒"`.
///
/// Zero hour and minute segments are omitted; the seconds segment always
/// renders, rounded to the nearest whole second with ties away from zero.
#[must_use]
pub fn format_span(span: Span) -> String {
    let mut out = String::new();
    if span.hours > 0 {
        write!(out, "{} 小时 ", span.hours).unwrap();
    }
    if span.minutes > 0 {
        write!(out, "{} 分钟 ", span.minutes).unwrap();
    }
    write!(out, "{} 秒", span.seconds.round()).unwrap();
    out
}
