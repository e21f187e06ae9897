//! Core domain logic for the punch work log.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: the checkpoint record and its status enum
//! - Spans: elapsed time between consecutive checkpoints
//! - Export: collapsing the log into one line per piece of work
//! - Time parsing: `HH:mm:ss` wall-clock input

pub mod entry;
pub mod export;
pub mod span;
pub mod timeparse;

pub use entry::{UnknownWorkStatus, WorkEntry, WorkStatus};
pub use export::{ExportLine, collect_lines, render_export};
pub use span::{Span, format_span, span_at};
pub use timeparse::{TimeParseError, parse_clock_time, parse_clock_time_today};
