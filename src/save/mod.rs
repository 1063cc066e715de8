//! Save-slot persistence.
//!
//! Payloads are wrapped in an envelope carrying the write time, then
//! stored as pretty JSON keyed by slot name. The file-backed store puts
//! slots under `~/.arcania/`; the in-memory store backs tests.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct SaveEnvelope<T> {
    state: T,
    /// Unix timestamp of the write.
    saved_at: i64,
}

fn pack<T: Serialize>(state: &T) -> io::Result<String> {
    let envelope = SaveEnvelope {
        state,
        saved_at: Utc::now().timestamp(),
    };
    serde_json::to_string_pretty(&envelope)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Keyed storage for save slots. Loads are forgiving: a missing or
/// malformed slot reads as `None`, never an error.
pub trait SaveStore {
    fn save<T: Serialize>(&self, key: &str, state: &T) -> io::Result<()>;
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
    /// When the slot was last written, if it exists and parses.
    fn saved_at(&self, key: &str) -> Option<i64>;
    fn delete(&self, key: &str) -> io::Result<()>;
}

/// Stores each slot at `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The default store under the user's home directory.
    pub fn new() -> Option<Self> {
        let dir = dirs::home_dir()?.join(".arcania");
        Some(Self { dir })
    }

    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }
}

impl SaveStore for FileStore {
    fn save<T: Serialize>(&self, key: &str, state: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), pack(state)?)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let envelope: SaveEnvelope<T> = serde_json::from_str(&self.read(key)?).ok()?;
        Some(envelope.state)
    }

    fn saved_at(&self, key: &str) -> Option<i64> {
        let envelope: SaveEnvelope<serde_json::Value> =
            serde_json::from_str(&self.read(key)?).ok()?;
        Some(envelope.saved_at)
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot with raw JSON, bypassing the envelope. Used to test
    /// malformed-save handling.
    pub fn put_raw(&self, key: &str, json: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), json.to_string());
    }
}

impl SaveStore for MemoryStore {
    fn save<T: Serialize>(&self, key: &str, state: &T) -> io::Result<()> {
        self.slots.borrow_mut().insert(key.to_string(), pack(state)?);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let slots = self.slots.borrow();
        let envelope: SaveEnvelope<T> = serde_json::from_str(slots.get(key)?).ok()?;
        Some(envelope.state)
    }

    fn saved_at(&self, key: &str) -> Option<i64> {
        let slots = self.slots.borrow();
        let envelope: SaveEnvelope<serde_json::Value> =
            serde_json::from_str(slots.get(key)?).ok()?;
        Some(envelope.saved_at)
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Player;

    #[test]
    fn test_memory_round_trip() {
        let store = MemoryStore::new();
        let mut player = Player::new();
        player.gold = 777;
        store.save("slot", &player).unwrap();
        let loaded: Player = store.load("slot").unwrap();
        assert_eq!(loaded, player);
        assert!(store.saved_at("slot").is_some());
    }

    #[test]
    fn test_missing_slot_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load::<Player>("nope").is_none());
        assert!(store.saved_at("nope").is_none());
    }

    #[test]
    fn test_malformed_slot_loads_none() {
        let store = MemoryStore::new();
        store.put_raw("slot", "{ not json");
        assert!(store.load::<Player>("slot").is_none());
        store.put_raw("slot", r#"{"state": {"wrong": "shape"}, "saved_at": 0}"#);
        assert!(store.load::<Player>("slot").is_none());
    }

    #[test]
    fn test_delete_clears_slot() {
        let store = MemoryStore::new();
        store.save("slot", &Player::new()).unwrap();
        store.delete("slot").unwrap();
        assert!(store.load::<Player>("slot").is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("arcania-save-test-{}", std::process::id()));
        let store = FileStore::at(dir.clone());
        let mut player = Player::new();
        player.level = 4;
        store.save("slot", &player).unwrap();
        let loaded: Player = store.load("slot").unwrap();
        assert_eq!(loaded, player);

        store.delete("slot").unwrap();
        assert!(store.load::<Player>("slot").is_none());
        // Deleting an already-missing slot is fine.
        store.delete("slot").unwrap();
        let _ = fs::remove_dir_all(dir);
    }
}
