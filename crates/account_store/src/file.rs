//! File-backed key-value store.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{KeyValueStore, StorageError, StorageResult};

/// Key-value store keeping one `<key>.json` file per key in a directory.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// value is always either the old or the new document.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Opens a store in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "Opened file key-value store");
        Ok(Self { dir })
    }

    /// Returns the directory values are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value)?;
        std::fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("data")).unwrap();

        assert_eq!(store.get("users").unwrap(), None);

        store.set("users", "[]").unwrap();
        assert_eq!(store.get("users").unwrap(), Some("[]".to_string()));
        assert!(dir.path().join("data").join("users.json").exists());

        store.set("users", "[{}]").unwrap();
        assert_eq!(store.get("users").unwrap(), Some("[{}]".to_string()));

        store.remove("users").unwrap();
        store.remove("users").unwrap();
        assert!(!store.contains("users").unwrap());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileKeyValueStore::open(dir.path())
            .unwrap()
            .set("currentUser", "{}")
            .unwrap();

        let reopened = FileKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("currentUser").unwrap(), Some("{}".to_string()));
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }
}
