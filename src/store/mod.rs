//! Persistent store for finalized weighing entries
//!
//! Entries live in `entries.json` inside the store directory as one
//! ordered array; insertion order is significant because it drives serial
//! allocation. Every mutation rewrites the whole collection.

pub mod layout;

pub use layout::LayoutStore;

use crate::domain::model::Entry;
use crate::error::{Result, StorageError};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Persistent store for weighing entries
pub struct EntryStore {
    store_path: PathBuf,
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create or load a store.
    ///
    /// A malformed payload is recovered locally: the store starts empty
    /// and a warning goes to stderr. Never fatal.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("entries.json");

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!(
                        "Warning: {}",
                        StorageError::Corrupt(format!("{}: {}", store_path.display(), e))
                    );
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(Self { store_path, entries })
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Last `n` entries in store order, for the listing table
    pub fn recent(&self, n: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// First entry with the given serial number
    pub fn find_by_serial(&self, serial: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.serial_number == serial)
    }

    /// Next serial number for a fresh session.
    ///
    /// Derived from the last-inserted entry, not the numeric maximum:
    /// `"1"` for an empty store, otherwise last serial + 1 when it parses
    /// as a number, else `"1"` again. This mirrors the behavior the
    /// deployed terminal had.
    pub fn next_serial(&self) -> String {
        match self.entries.last() {
            None => "1".to_string(),
            Some(entry) => entry
                .serial_number
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
                .map(|n| n.to_string())
                .unwrap_or_else(|| "1".to_string()),
        }
    }

    /// Append a new entry, or replace the entry with the same serial
    /// number when `is_editing` is set.
    ///
    /// The collection is committed in memory only after the rewrite
    /// lands on disk, so a failed persist leaves the store exactly as it
    /// was and the caller can retry.
    pub fn upsert(&mut self, entry: Entry, is_editing: bool) -> Result<&[Entry]> {
        let mut updated = self.entries.clone();
        if is_editing {
            if let Some(existing) = updated
                .iter_mut()
                .find(|e| e.serial_number == entry.serial_number)
            {
                *existing = entry;
            } else {
                updated.push(entry);
            }
        } else {
            updated.push(entry);
        }

        self.persist(&updated)?;
        self.entries = updated;
        Ok(&self.entries)
    }

    /// Rewrite the whole collection through a temp file so readers never
    /// observe a partial write.
    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let tmp_path = self.store_path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let file = File::create(&tmp_path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, entries)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            fs::rename(&tmp_path, &self.store_path)
        };

        write().map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }
}
