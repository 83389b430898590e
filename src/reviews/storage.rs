//! Durable key-value storage behind the review store.
//!
//! Values are opaque serialized records; the store owns the encoding.
//! [`FileStorage`] keeps every entry in a single JSON document and replaces it
//! atomically (temp file + rename), so a failed write never leaves a partial
//! document behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ReviewError, ReviewResult};

const REVIEWS_FILENAME: &str = "reviews.json";

/// Storage port for serialized review records
pub trait ReviewStorage {
    fn get(&self, key: &str) -> ReviewResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> ReviewResult<()>;
}

/// In-process storage, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReviewStorage for MemoryStorage {
    fn get(&self, key: &str) -> ReviewResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> ReviewResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Storage backed by `reviews.json` inside a data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Open storage in `data_dir`, creating the directory if missing
    pub fn open(data_dir: &Path) -> ReviewResult<Self> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| {
                ReviewError::StorageUnavailable(format!(
                    "Failed to create data directory {}: {}",
                    data_dir.display(),
                    e
                ))
            })?;
        }
        Ok(Self { path: data_dir.join(REVIEWS_FILENAME) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> ReviewResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            ReviewError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| ReviewError::StorageCorrupt {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> ReviewResult<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| ReviewError::StorageUnavailable(e.to_string()))?;

        let temp = self.path.with_file_name(format!("{}.tmp", REVIEWS_FILENAME));
        fs::write(&temp, json).map_err(|e| {
            ReviewError::StorageUnavailable(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        fs::rename(&temp, &self.path).map_err(|e| {
            ReviewError::StorageUnavailable(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

impl ReviewStorage for FileStorage {
    fn get(&self, key: &str) -> ReviewResult<Option<String>> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> ReviewResult<()> {
        // A corrupt document is never overwritten; the error reaches the caller
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }
}
