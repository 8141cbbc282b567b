//! File-backed key/value storage for the session marker.
//!
//! The file holds a single JSON object of string keys to string values. A
//! missing, unreadable or malformed file reads as empty; writes replace the
//! whole file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vendor_portal_core::{KeyValueStorage, StorageError};

type Entries = BTreeMap<String, String>;

/// JSON file storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a storage backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Entries {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Entries::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Storage file unreadable");
                return Entries::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Storage file malformed");
            Entries::new()
        })
    }

    fn store(&self, entries: &Entries) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Backend(e.to_string()))?;
        }

        fs::write(&self.path, json).map_err(|e| StorageError::Backend(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "Storage file written");
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Entries)) -> Result<(), StorageError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".to_string()))?;

        let mut entries = self.load();
        f(&mut entries);
        self.store(&entries)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        assert_eq!(storage.get("vendor_email"), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_set_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));

        storage.set("vendor_email", "oxsportshop@gmail.com").unwrap();
        assert_eq!(
            storage.get("vendor_email").as_deref(),
            Some("oxsportshop@gmail.com")
        );

        storage.delete("vendor_email").unwrap();
        assert_eq!(storage.get("vendor_email"), None);
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session.json");

        FileStorage::new(&path)
            .set("vendor_email", "hello@harborcoffee.co")
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(
            reopened.get("vendor_email").as_deref(),
            Some("hello@harborcoffee.co")
        );
    }

    #[test]
    fn test_other_keys_are_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let storage = FileStorage::new(&path);
        storage.set("vendor_email", "oxsportshop@gmail.com").unwrap();
        storage.delete("vendor_email").unwrap();

        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("vendor_email"), None);

        // A write replaces the malformed content
        storage.set("vendor_email", "oxsportshop@gmail.com").unwrap();
        assert_eq!(
            storage.get("vendor_email").as_deref(),
            Some("oxsportshop@gmail.com")
        );
    }
}
