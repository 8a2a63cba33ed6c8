//! File-backed state store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{StateStore, StoreError};

/// Primary backend: a single JSON map at `<data_dir>/state.json`.
///
/// The durable state is tiny (a handful of keys), so every operation
/// re-reads and rewrites the whole file. A missing or empty file reads as
/// an empty map.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    const STATE_FILE: &'static str = "state.json";

    /// Create a store backed by `<data_dir>/state.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(Self::STATE_FILE) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_get_on_missing_file() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        assert_eq!(store.get("k").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_creates_file_and_persists() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("autofocus.source", "inbox").unwrap();

        // A second handle over the same directory sees the value.
        let other = FileStore::new(tmp.path());
        assert_eq!(other.get("autofocus.source").unwrap().as_deref(), Some("inbox"));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_deletes_key() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path());
        fs::write(store.path(), "not json").unwrap();
        assert!(store.get("k").is_err());
    }
}
