//! Storage layer for VibePay
//!
//! A key-value store abstraction with a file-backed implementation (atomic
//! writes, automatic directory creation) and the session repository on top.

pub mod file_io;
pub mod kv;
pub mod session;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use session::{SessionRepository, STORAGE_KEY};

use crate::config::paths::VibepayPaths;
use crate::error::VibepayError;

/// Open the session repository backed by files under the data directory
pub fn open(paths: &VibepayPaths) -> Result<SessionRepository<FileStore>, VibepayError> {
    paths.ensure_directories()?;
    Ok(SessionRepository::new(FileStore::new(paths.data_dir())))
}
