//! Row mutations: `punch edit`, `punch insert`, `punch remove`.

use std::io::Write;

use anyhow::{Context, Result};

use punch_core::{WorkStatus, parse_clock_time_today};
use punch_store::WorkLogStore;

/// Edits the row at `index` in place.
///
/// The replacement entry is built from the existing row and handed to the
/// store's wholesale `update`. A malformed `--time` value keeps the prior
/// timestamp; a bad `--status` is a hard error since it can only come from
/// the command line.
pub fn run<W: Write>(
    writer: &mut W,
    store: &mut WorkLogStore,
    index: usize,
    time: Option<&str>,
    desc: Option<&str>,
    status: Option<&str>,
) -> Result<()> {
    let Some(existing) = store.entries().get(index) else {
        writeln!(writer, "No row #{index}.")?;
        return Ok(());
    };

    let mut entry = existing.clone();
    if let Some(input) = time {
        match parse_clock_time_today(input) {
            Ok(ms) => entry.time = Some(ms),
            Err(err) => tracing::debug!(%err, "time input rejected, keeping prior value"),
        }
    }
    if let Some(desc) = desc {
        entry.desc = desc.to_string();
    }
    if let Some(status) = status {
        entry.status = status.parse::<WorkStatus>()?;
    }

    store
        .update(index, entry)
        .with_context(|| format!("failed to update row #{index}"))?;
    writeln!(writer, "Updated #{index}.")?;
    Ok(())
}

/// Inserts a placeholder row at `index` (clamped to the end of the log).
pub fn insert<W: Write>(writer: &mut W, store: &mut WorkLogStore, index: usize) -> Result<()> {
    store
        .insert(index)
        .with_context(|| format!("failed to insert at #{index}"))?;
    writeln!(writer, "Inserted placeholder row.")?;
    Ok(())
}

/// Removes the row at `index`; out-of-range indices are ignored.
pub fn remove<W: Write>(writer: &mut W, store: &mut WorkLogStore, index: usize) -> Result<()> {
    let before = store.entries().len();
    store
        .remove(index)
        .with_context(|| format!("failed to remove row #{index}"))?;
    if store.entries().len() < before {
        writeln!(writer, "Removed #{index}.")?;
    } else {
        writeln!(writer, "No row #{index}.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use punch_core::WorkEntry;

    fn scratch_store() -> (tempfile::TempDir, WorkLogStore) {
        let temp = tempfile::tempdir().unwrap();
        let store = WorkLogStore::open(temp.path().join("worklog.json")).unwrap();
        (temp, store)
    }

    #[test]
    fn edit_applies_desc_and_status() {
        let (_temp, mut store) = scratch_store();
        store.append_at(WorkStatus::Start, 1000).unwrap();

        let mut output = Vec::new();
        run(&mut output, &mut store, 0, None, Some("修 bug"), Some("doing")).unwrap();

        let entry = &store.entries()[0];
        assert_eq!(entry.desc, "修 bug");
        assert_eq!(entry.status, WorkStatus::Doing);
        assert_eq!(entry.time, Some(1000));
    }

    #[test]
    fn malformed_time_keeps_prior_value() {
        let (_temp, mut store) = scratch_store();
        store.append_at(WorkStatus::Start, 1000).unwrap();

        let mut output = Vec::new();
        run(&mut output, &mut store, 0, Some("not-a-time"), None, None).unwrap();

        assert_eq!(store.entries()[0].time, Some(1000));
    }

    #[test]
    fn valid_time_fills_a_placeholder_row() {
        let (_temp, mut store) = scratch_store();
        store.insert(0).unwrap();
        assert_eq!(store.entries()[0], WorkEntry::placeholder());

        let mut output = Vec::new();
        run(&mut output, &mut store, 0, Some("09:15:00"), None, None).unwrap();

        assert!(store.entries()[0].time.is_some());
    }

    #[test]
    fn edit_out_of_range_changes_nothing() {
        let (_temp, mut store) = scratch_store();
        store.append_at(WorkStatus::Start, 1000).unwrap();
        let before = store.entries().to_vec();

        let mut output = Vec::new();
        run(&mut output, &mut store, 9, None, Some("x"), None).unwrap();

        assert_eq!(store.entries(), before.as_slice());
        assert_eq!(String::from_utf8(output).unwrap(), "No row #9.\n");
    }

    #[test]
    fn unknown_status_is_an_error() {
        let (_temp, mut store) = scratch_store();
        store.append_at(WorkStatus::Start, 1000).unwrap();

        let mut output = Vec::new();
        let result = run(&mut output, &mut store, 0, None, None, Some("paused"));
        assert!(result.is_err());
    }

    #[test]
    fn remove_reports_out_of_range() {
        let (_temp, mut store) = scratch_store();
        store.append_at(WorkStatus::Start, 1000).unwrap();

        let mut output = Vec::new();
        remove(&mut output, &mut store, 4).unwrap();
        assert_eq!(store.entries().len(), 1);
        assert_eq!(String::from_utf8(output).unwrap(), "No row #4.\n");
    }
}
