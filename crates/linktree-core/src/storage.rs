//! Persistent key/value storage using redb.
//!
//! The page keeps exactly one preference, but the store is a plain
//! string-to-string table so the preference layer stays unaware of redb.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::LinkTreeError;

const KEY_VALUE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("key_value");

/// File name of the preference database inside the data directory.
pub const DATABASE_FILE: &str = "preferences.redb";

/// Directory name under the platform data dir shared by every front end.
pub const DATA_DIR_NAME: &str = "linktree";

/// Default data directory (`<platform data dir>/linktree`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Client-local string key/value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, LinkTreeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), LinkTreeError>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the key/value table if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LinkTreeError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KEY_VALUE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preference storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open `preferences.redb` inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self, LinkTreeError> {
        Self::new(data_dir.as_ref().join(DATABASE_FILE))
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, LinkTreeError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KEY_VALUE_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LinkTreeError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(KEY_VALUE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile store; used in tests and when the database cannot be opened.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LinkTreeError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LinkTreeError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open the on-disk store, falling back to memory if that fails.
///
/// The database is exclusively locked while open, so a second process on the
/// same data directory lands here too. With the fallback the preference only
/// lasts for the session.
pub fn open_or_memory(data_dir: impl AsRef<Path>) -> Arc<dyn KeyValueStore> {
    let data_dir = data_dir.as_ref();
    match Storage::open_in(data_dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(
                "Preference storage unavailable at {:?}, using memory: {}",
                data_dir,
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_storage_set_and_get() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("test.redb")).unwrap();

        assert_eq!(storage.get("darkMode").unwrap(), None);
        storage.set("darkMode", "true").unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));
        storage.set("darkMode", "false").unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_storage_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let storage = Storage::open_in(dir.path()).unwrap();
            storage.set("darkMode", "true").unwrap();
        }
        let storage = Storage::open_in(dir.path()).unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_storage_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        Storage::open_in(&nested).unwrap();
        assert!(nested.join(DATABASE_FILE).exists());
    }

    #[test]
    fn test_memory_store_shared_between_clones() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(clone.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_open_or_memory_persists_when_available() {
        let dir = tempdir().unwrap();
        {
            let store = open_or_memory(dir.path());
            store.set("darkMode", "true").unwrap();
        }
        let storage = Storage::open_in(dir.path()).unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_open_or_memory_falls_back_under_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain-file");
        std::fs::write(&file, b"not a directory").unwrap();

        let store = open_or_memory(file.join("sub"));
        assert_eq!(store.get("darkMode").unwrap(), None);
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_open_or_memory_falls_back_when_locked() {
        let dir = tempdir().unwrap();
        let held = Storage::open_in(dir.path()).unwrap();
        held.set("darkMode", "true").unwrap();

        let store = open_or_memory(dir.path());
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_default_data_dir_name() {
        assert!(default_data_dir().ends_with(DATA_DIR_NAME));
    }
}
