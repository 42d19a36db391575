//! Key-value stores
//!
//! A `KeyValueStore` holds string values under string keys, the same shape as
//! browser local storage. `FileStore` keeps every key in a single JSON object
//! file and rewrites it on each `set`; `MemoryStore` never touches disk.

use crate::storage::error::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable string-to-string storage
pub trait KeyValueStore: Send {
    /// Read a value; `None` when the key has never been written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by one JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// File name used inside a data directory
    pub const FILE_NAME: &'static str = "storage.json";

    /// Open the store in `data_dir`, creating nothing until the first write
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        Self::open_file(data_dir.join(Self::FILE_NAME))
    }

    /// Open a store at an explicit file path
    pub fn open_file(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("No store file at {:?}, starting empty", path);
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let entries = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&content).map_err(|e| StoreError::Corruption {
                path: path.clone(),
                error: e.to_string(),
            })?
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// On a failed write the previous value is restored, so memory never
    /// runs ahead of the file.
    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        let previous = self.entries.insert(key.to_string(), value);

        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
