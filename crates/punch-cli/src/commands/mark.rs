//! Punching a new checkpoint (`punch start|finish|doing`).

use std::io::Write;

use anyhow::{Context, Result};

use punch_core::WorkStatus;
use punch_store::WorkLogStore;

use super::util::format_clock;

/// Appends a checkpoint stamped "now", optionally labeling it right away.
///
/// Appending and labeling are the store's own `append` and `update`
/// operations; the label is applied as a second mutation so the persisted
/// log never holds a half-written row.
pub fn run<W: Write>(
    writer: &mut W,
    store: &mut WorkLogStore,
    status: WorkStatus,
    desc: Option<&str>,
) -> Result<()> {
    store
        .append(status)
        .context("failed to record checkpoint")?;
    let index = store.entries().len() - 1;

    if let Some(desc) = desc.filter(|d| !d.is_empty()) {
        let mut entry = store.entries()[index].clone();
        entry.desc = desc.to_string();
        store
            .update(index, entry)
            .context("failed to label checkpoint")?;
    }

    let entry = &store.entries()[index];
    if entry.desc.is_empty() {
        writeln!(writer, "#{index} {} at {}", entry.status, format_clock(entry.time))?;
    } else {
        writeln!(
            writer,
            "#{index} {} at {}: {}",
            entry.status,
            format_clock(entry.time),
            entry.desc
        )?;
    }
    Ok(())
}
