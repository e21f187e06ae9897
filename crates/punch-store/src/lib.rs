//! Storage layer for the punch work log.
//!
//! The entire log lives in one JSON document on disk (the single "slot"),
//! loaded once at startup and rewritten in full on every mutation. There is
//! no incremental persistence.
//!
//! # Consistency
//!
//! Mutations never splice the live log. Each one builds a fresh snapshot,
//! persists it, and only then swaps it into memory. A failed write therefore
//! leaves the in-memory log equal to what is on disk, and the error
//! propagates as [`StoreError`] instead of being swallowed.
//!
//! # Slot format
//!
//! ```json
//! { "version": 1, "entries": [ { "status": "start", "time": 1700000000000, "desc": "..." } ] }
//! ```
//!
//! Earlier revisions persisted a bare JSON array with no version field.
//! Loading still accepts that form; the next mutation rewrites the slot in
//! the versioned shape.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use punch_core::{WorkEntry, WorkStatus};

/// Current slot schema version.
pub const SLOT_VERSION: u32 = 1;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot could not be read or written.
    #[error("storage failure for {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The slot exists but does not hold a work log.
    #[error("corrupt work log slot {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Versioned on-disk payload.
#[derive(Debug, Serialize, Deserialize)]
struct Slot {
    version: u32,
    entries: Vec<WorkEntry>,
}

/// Accepts both the versioned slot and the legacy bare-array form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SlotPayload {
    Versioned(Slot),
    Legacy(Vec<WorkEntry>),
}

/// The authoritative, persisted work log.
///
/// Construct one at application start and pass it to whatever needs to
/// mutate the log; it is single-actor by design and does no locking.
#[derive(Debug)]
pub struct WorkLogStore {
    path: PathBuf,
    entries: Vec<WorkEntry>,
}

impl WorkLogStore {
    /// Opens the slot at `path`, loading any existing log.
    ///
    /// A missing file is an empty log, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let payload: SlotPayload =
                    serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                        path: path.clone(),
                        source,
                    })?;
                match payload {
                    SlotPayload::Versioned(slot) => slot.entries,
                    SlotPayload::Legacy(entries) => {
                        tracing::debug!(
                            path = %path.display(),
                            count = entries.len(),
                            "migrated legacy unversioned slot"
                        );
                        entries
                    }
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Storage { path, source }),
        };
        tracing::debug!(path = %path.display(), count = entries.len(), "opened work log");
        Ok(Self { path, entries })
    }

    /// Path of the underlying slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the current snapshot.
    #[must_use]
    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    /// Appends a checkpoint stamped with the current wall-clock time.
    pub fn append(&mut self, status: WorkStatus) -> Result<&[WorkEntry], StoreError> {
        self.append_at(status, Utc::now().timestamp_millis())
    }

    /// Appends a checkpoint stamped with the given epoch milliseconds.
    pub fn append_at(
        &mut self,
        status: WorkStatus,
        time_ms: i64,
    ) -> Result<&[WorkEntry], StoreError> {
        let mut next = self.entries.clone();
        next.push(WorkEntry::stamped(status, time_ms));
        self.commit(next)
    }

    /// Inserts a placeholder row at `index`, shifting later entries right.
    ///
    /// An out-of-range index clamps to the end of the log.
    pub fn insert(&mut self, index: usize) -> Result<&[WorkEntry], StoreError> {
        let index = index.min(self.entries.len());
        let mut next = self.entries.clone();
        next.insert(index, WorkEntry::placeholder());
        self.commit(next)
    }

    /// Replaces the entry at `index` wholesale.
    ///
    /// An out-of-range index is a silent no-op.
    pub fn update(
        &mut self,
        index: usize,
        entry: WorkEntry,
    ) -> Result<&[WorkEntry], StoreError> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "update out of range, ignored");
            return Ok(&self.entries);
        }
        let mut next = self.entries.clone();
        next[index] = entry;
        self.commit(next)
    }

    /// Removes the entry at `index`, shifting later entries left.
    ///
    /// An out-of-range index is a silent no-op.
    pub fn remove(&mut self, index: usize) -> Result<&[WorkEntry], StoreError> {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "remove out of range, ignored");
            return Ok(&self.entries);
        }
        let mut next = self.entries.clone();
        next.remove(index);
        self.commit(next)
    }

    /// Replaces the entire log with an empty sequence. Irreversible.
    pub fn reset(&mut self) -> Result<&[WorkEntry], StoreError> {
        self.commit(Vec::new())
    }

    /// Persists `next` and, only on success, makes it the current snapshot.
    fn commit(&mut self, next: Vec<WorkEntry>) -> Result<&[WorkEntry], StoreError> {
        let slot = Slot {
            version: SLOT_VERSION,
            entries: next,
        };
        let json = serde_json::to_string(&slot).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Storage {
            path: self.path.clone(),
            source,
        })?;
        self.entries = slot.entries;
        tracing::debug!(path = %self.path.display(), count = self.entries.len(), "slot written");
        Ok(&self.entries)
    }
}
