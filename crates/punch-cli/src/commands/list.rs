//! Listing the log with per-row elapsed spans (`punch list`).

use std::io::Write;

use anyhow::Result;

use punch_core::{WorkEntry, format_span, span_at};

use super::util::format_clock;

/// Renders the log, one row per checkpoint.
pub fn run<W: Write>(writer: &mut W, entries: &[WorkEntry]) -> Result<()> {
    if entries.is_empty() {
        writeln!(writer, "No checkpoints recorded.")?;
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        let span = format_span(span_at(entries, index));
        writeln!(
            writer,
            "#{index}  {}  {:<6}  用时 {}  {}",
            format_clock(entry.time),
            entry.status.as_str(),
            span,
            entry.desc
        )?;
    }
    Ok(())
}
