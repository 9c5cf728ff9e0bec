//! Key/value persistence
//!
//! Directory structure:
//! ```text
//! {data_dir}/
//! └── {key}          # plain text value, one file per key
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string-keyed store of string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` synchronously
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as a file under a data directory
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory (e.g., ~/.local/share/kana)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("kana"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Get the file backing a key
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Atomic write (write to .tmp then rename)
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let tmp_path = self.base_path.join(format!("{}.tmp", key));
        fs::create_dir_all(&self.base_path)?;
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("kana"));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("hiraganaPoints").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_roundtrips() {
        let (store, _temp) = create_test_store();
        store.set("hiraganaPoints", "120").unwrap();
        assert!(store.base_path().join("hiraganaPoints").exists());
        assert_eq!(store.get("hiraganaPoints").unwrap().as_deref(), Some("120"));

        store.set("hiraganaPoints", "0").unwrap();
        assert_eq!(store.get("hiraganaPoints").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn test_set_replaces_value_without_leftovers() {
        let (store, _temp) = create_test_store();
        store.set("hiraganaPoints", "6000").unwrap();
        store.set("hiraganaPoints", "5100").unwrap();

        assert_eq!(store.get("hiraganaPoints").unwrap().as_deref(), Some("5100"));
        assert!(!store.base_path().join("hiraganaPoints.tmp").exists());
        let entries = fs::read_dir(store.base_path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_path_like_keys_rejected() {
        let (store, _temp) = create_test_store();
        assert!(matches!(store.set("../escape", "1"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.get(".hidden"), Err(StorageError::InvalidKey(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
