//! Key/value storage port for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for browser `localStorage`: string values under string keys,
//! read and written wholesale. `FileStorage` keeps one file per key under a
//! data directory; `MemoryStorage` backs tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    #[error("storage serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

pub trait Storage: Send + Sync {
    /// Read the value under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error if the read fails or the stored value is not valid JSON
/// for `T`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Option<T>, StorageError> {
    match storage.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// One `<key>.json` file per key inside `dir`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let io_err = |source| StorageError::Io { key: key.to_string(), source };
        fs::create_dir_all(&self.dir).map_err(io_err)?;

        // Write-then-rename so a crash never leaves a half-written value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { key: key.to_string(), source }),
        }
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
