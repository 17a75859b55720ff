//! Key-value stores
//!
//! The session is persisted as one JSON string under one key, the same
//! contract a browser's local storage offers. `FileStore` keeps each key in
//! its own file; `MemoryStore` keeps everything in process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{VibepayError, VibepayResult};

use super::file_io::{read_optional, write_atomic};

/// Get/set string values by key
pub trait KeyValueStore {
    /// The stored value, or `None` if the key was never set
    fn get(&self, key: &str) -> VibepayResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> VibepayResult<()>;
}

/// Keys become file names, so only a safe subset of characters is allowed
fn validate_key(key: &str) -> VibepayResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(VibepayError::Validation(format!(
            "Invalid storage key: {:?}",
            key
        )))
    }
}

/// File-backed store: `<dir>/<key>.json`, written atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> VibepayResult<Option<String>> {
        validate_key(key)?;
        read_optional(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> VibepayResult<()> {
        validate_key(key)?;
        write_atomic(self.path_for(key), value)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> VibepayResult<Option<String>> {
        let data = self.data.read().map_err(|e| {
            VibepayError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> VibepayResult<()> {
        let mut data = self.data.write().map_err(|e| {
            VibepayError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
