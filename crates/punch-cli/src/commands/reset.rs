//! Reset command: wipe the log (`punch reset --yes`).

use std::io::Write;

use anyhow::{Context, Result};

use punch_store::WorkLogStore;

/// Clears the entire log. Requires explicit confirmation because there is
/// no undo.
pub fn run<W: Write>(writer: &mut W, store: &mut WorkLogStore, yes: bool) -> Result<()> {
    if !yes {
        writeln!(
            writer,
            "This deletes the entire work log. Re-run with --yes to confirm."
        )?;
        return Ok(());
    }
    store.reset().context("failed to clear work log")?;
    writeln!(writer, "Work log cleared.")?;
    Ok(())
}
