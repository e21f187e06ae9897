//! Export aggregation: collapsing the log into one line per piece of work.
//!
//! The log is walked once while an "open span" tracks the work currently
//! being timed. Each `(open status, incoming status)` pair dispatches
//! through a fixed transition table; `doing` punches extend the open span
//! instead of closing it, adopting their description when the open span has
//! none.

use std::fmt::Write;

use crate::entry::{WorkEntry, WorkStatus};
use crate::span::Span;

/// One emitted export line before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    /// Elapsed milliseconds for this piece of work. May be negative when
    /// the user edited timestamps out of order; rendering collapses that to
    /// an empty duration.
    pub span_ms: i64,
    /// Description attributed to the span.
    pub desc: String,
}

/// The span currently being accumulated during the walk.
#[derive(Debug, Clone)]
struct OpenSpan {
    status: WorkStatus,
    time: i64,
    desc: String,
}

impl OpenSpan {
    fn seed(status: WorkStatus, time: i64, desc: &str) -> Self {
        Self {
            status,
            time,
            desc: desc.to_string(),
        }
    }

    /// `doing` never opens a new span; it only carries a description into
    /// the current one when that one is still unlabeled.
    fn absorb_doing(&mut self, desc: &str) {
        if self.desc.is_empty() && !desc.is_empty() {
            self.desc = desc.to_string();
        }
        self.status = WorkStatus::Doing;
    }
}

/// Walks the log and emits one line per closed span.
///
/// Entries without a timestamp are skipped entirely. The first timestamped
/// entry seeds the open span; every later one dispatches on
/// `(open status, entry status)`.
#[must_use]
pub fn collect_lines(entries: &[WorkEntry]) -> Vec<ExportLine> {
    let mut lines = Vec::new();
    let mut open: Option<OpenSpan> = None;

    for entry in entries {
        let Some(time) = entry.time else {
            continue;
        };
        let Some(span) = open.as_mut() else {
            open = Some(OpenSpan::seed(entry.status, time, &entry.desc));
            continue;
        };

        match (span.status, entry.status) {
            (WorkStatus::Start, WorkStatus::Start | WorkStatus::Finish) => {
                lines.push(ExportLine {
                    span_ms: time - span.time,
                    desc: span.desc.clone(),
                });
                *span = OpenSpan::seed(entry.status, time, &entry.desc);
            }
            (WorkStatus::Finish, WorkStatus::Finish) => {
                // Historical quirk kept on purpose: a finish following a
                // finish is attributed to the NEW entry's description, not
                // the one that opened the span.
                lines.push(ExportLine {
                    span_ms: time - span.time,
                    desc: entry.desc.clone(),
                });
                *span = OpenSpan::seed(entry.status, time, &entry.desc);
            }
            (WorkStatus::Finish, WorkStatus::Start) => {
                // Gap between two pieces of work: nothing to emit.
                *span = OpenSpan::seed(entry.status, time, &entry.desc);
            }
            (WorkStatus::Start | WorkStatus::Finish, WorkStatus::Doing) => {
                span.absorb_doing(&entry.desc);
            }
            (WorkStatus::Doing, WorkStatus::Start | WorkStatus::Finish) => {
                lines.push(ExportLine {
                    span_ms: time - span.time,
                    desc: span.desc.clone(),
                });
                *span = OpenSpan::seed(entry.status, time, &entry.desc);
            }
            (WorkStatus::Doing, WorkStatus::Doing) => {}
        }
    }

    lines
}

/// Renders the export document: one `"{desc}（{h}小时{m}分钟）"` line per
/// closed span, zero segments suppressed, seconds dropped, joined by
/// newlines. An empty or single-entry log renders as the empty string.
#[must_use]
pub fn render_export(entries: &[WorkEntry]) -> String {
    collect_lines(entries)
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &ExportLine) -> String {
    let span = Span::from_millis(line.span_ms);
    let mut duration = String::new();
    if span.hours > 0 {
        write!(duration, "{}小时", span.hours).unwrap();
    }
    if span.minutes > 0 {
        write!(duration, "{}分钟", span.minutes).unwrap();
    }
    format!("{}（{}）", line.desc, duration)
}
