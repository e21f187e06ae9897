//! Export command: the aggregated summary (`punch export`).

use std::io::Write;

use anyhow::Result;

use punch_core::{WorkEntry, render_export};

/// Writes the export document, one line per closed span.
pub fn run<W: Write>(writer: &mut W, entries: &[WorkEntry]) -> Result<()> {
    let report = render_export(entries);
    if report.is_empty() {
        writeln!(writer, "(no completed spans)")?;
    } else {
        writeln!(writer, "{report}")?;
    }
    Ok(())
}
