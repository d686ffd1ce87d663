//! Injectable key-value byte storage for snapshots.

use crate::persist::error::PersistError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

/// A key-value byte store the persistence layer writes snapshots through.
///
/// The backend is a pass-through: it stores and returns bytes as given,
/// with no integrity guarantees of its own. `load` returns `Ok(None)`
/// when no value has ever been saved under the key.
pub trait StorageBackend: Send + Sync {
    /// Load the bytes saved under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError>;

    /// Save `bytes` under `key`, replacing any previous value.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), PersistError>;
}

/// In-memory backend for tests and ephemeral stores.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), PersistError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// File-backed backend: one file per key under a root directory.
///
/// The root directory is created on first save. Keys are used as file
/// names directly, so they must be valid file names (store names like
/// `"counter-storage"` are).
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<(), PersistError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}
