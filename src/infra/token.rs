//! Persistent storage for the auth token.
//!
//! `KeyValueStore` is the storage backend (a JSON file on disk, or memory in
//! tests); `TokenStorage` scopes it to the single key that holds the token.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::TokenStoreError;

/// Key under which the bearer token is stored.
pub const AUTH_TOKEN_KEY: &str = "six-cities-token";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
}

/// JSON object on disk, rewritten on every change.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let _guard = self.lock.lock();
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Auth token accessor shared by the HTTP client and the runtime.
#[derive(Clone)]
pub struct TokenStorage {
    backend: Arc<dyn KeyValueStore>,
}

impl TokenStorage {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Stored token, or an empty string when none is saved or the store
    /// cannot be read.
    pub fn get(&self) -> String {
        match self.backend.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(err) => {
                log::warn!("Failed to read auth token: {}", err);
                String::new()
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        self.backend.set(AUTH_TOKEN_KEY, token)
    }

    pub fn purge(&self) -> Result<(), TokenStoreError> {
        self.backend.remove(AUTH_TOKEN_KEY)
    }
}

impl std::fmt::Debug for TokenStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStorage").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_empty_string_when_missing() {
        assert_eq!(TokenStorage::in_memory().get(), "");
    }

    #[test]
    fn save_overwrites_and_purge_clears() {
        let tokens = TokenStorage::in_memory();
        tokens.save("first-token").unwrap();
        tokens.save("second-token").unwrap();
        assert_eq!(tokens.get(), "second-token");

        tokens.purge().unwrap();
        assert_eq!(tokens.get(), "");
        // purging twice is fine
        tokens.purge().unwrap();
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("storage.json");

        TokenStorage::new(Arc::new(FileStore::new(&path)))
            .save("integration-token")
            .unwrap();

        let reopened = TokenStorage::new(Arc::new(FileStore::new(&path)));
        assert_eq!(reopened.get(), "integration-token");

        reopened.purge().unwrap();
        assert_eq!(TokenStorage::new(Arc::new(FileStore::new(&path))).get(), "");
    }

    #[test]
    fn file_store_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage.json"));
        store.set("theme", "dark").unwrap();

        let tokens = TokenStorage::new(Arc::new(FileStore::new(store.path())));
        tokens.save("abc").unwrap();
        tokens.purge().unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_reads_as_empty_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get(AUTH_TOKEN_KEY),
            Err(TokenStoreError::Corrupt(_))
        ));
        assert_eq!(TokenStorage::new(Arc::new(store)).get(), "");
    }
}
