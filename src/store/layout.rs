//! Persistent print-layout overrides
//!
//! The print page lets the operator drag ticket fields around and export
//! the result as a tagged JSON message. Accepted positions are stored in
//! `print_positions.json` and merged over the built-in defaults at print
//! time.

use crate::error::{Result, StorageError};
use crate::export::ticket::PRINT_FIELD_IDS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Pixel offset of a ticket field on the printed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Repositioning message produced by the print page.
///
/// The payload is tagged so that anything that is not a well-formed
/// position message (a stale or foreign file, for instance) is rejected
/// at parse time instead of clobbering the stored layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutMessage {
    #[serde(rename = "savePrintPositions")]
    SavePrintPositions {
        positions: HashMap<String, Position>,
    },
}

/// Persistent store for print-layout overrides
pub struct LayoutStore {
    store_path: PathBuf,
    positions: HashMap<String, Position>,
}

impl LayoutStore {
    /// Create or load the layout store; a malformed payload resets to no
    /// overrides with a warning, same recovery as the entry store.
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("print_positions.json");

        let positions = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(positions) => positions,
                Err(e) => {
                    eprintln!(
                        "Warning: {}",
                        StorageError::Corrupt(format!("{}: {}", store_path.display(), e))
                    );
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, positions })
    }

    /// Current overrides, by field id
    pub fn positions(&self) -> &HashMap<String, Position> {
        &self.positions
    }

    /// Validate and apply a repositioning message.
    ///
    /// Positions for unknown field ids are dropped; known ids overwrite
    /// the stored override unconditionally.
    pub fn apply_message(&mut self, message: LayoutMessage) -> Result<()> {
        let LayoutMessage::SavePrintPositions { positions } = message;
        for (id, position) in positions {
            if PRINT_FIELD_IDS.contains(&id.as_str()) {
                self.positions.insert(id, position);
            }
        }
        self.persist()
    }

    /// Parse a message from raw JSON and apply it
    pub fn apply_json(&mut self, json: &str) -> Result<()> {
        let message: LayoutMessage = serde_json::from_str(json)?;
        self.apply_message(message)
    }

    fn persist(&self) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let file = File::create(&self.store_path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &self.positions)
                .map_err(|e| std::io::Error::other(e.to_string()))
        };

        write().map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_apply_message_merges_and_persists() {
        let dir = tempdir().unwrap();
        {
            let mut store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
            store
                .apply_json(r#"{"type":"savePrintPositions","positions":{"serial":{"x":120,"y":40}}}"#)
                .unwrap();
        }

        let store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.positions()["serial"], Position { x: 120, y: 40 });
    }

    #[test]
    fn test_later_message_overwrites() {
        let dir = tempdir().unwrap();
        let mut store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
        store
            .apply_json(r#"{"type":"savePrintPositions","positions":{"driver":{"x":10,"y":10}}}"#)
            .unwrap();
        store
            .apply_json(r#"{"type":"savePrintPositions","positions":{"driver":{"x":90,"y":350}}}"#)
            .unwrap();
        assert_eq!(store.positions()["driver"], Position { x: 90, y: 350 });
    }

    #[test]
    fn test_unknown_field_ids_dropped() {
        let dir = tempdir().unwrap();
        let mut store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
        store
            .apply_json(
                r#"{"type":"savePrintPositions","positions":{"bogus":{"x":1,"y":2},"vehicle":{"x":3,"y":4}}}"#,
            )
            .unwrap();
        assert!(!store.positions().contains_key("bogus"));
        assert_eq!(store.positions()["vehicle"], Position { x: 3, y: 4 });
    }

    #[test]
    fn test_wrong_tag_rejected() {
        let dir = tempdir().unwrap();
        let mut store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store
            .apply_json(r#"{"type":"somethingElse","positions":{}}"#)
            .is_err());
        assert!(store.apply_json("not json at all").is_err());
        assert!(store.positions().is_empty());
    }

    #[test]
    fn test_corrupt_layout_recovers_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("print_positions.json"), "[oops").unwrap();
        let store = LayoutStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.positions().is_empty());
    }
}
