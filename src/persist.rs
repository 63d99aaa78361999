//! Best-effort snapshot persistence.
//! The raster is stored as one opaque blob under a fixed key in an
//! origin-scoped key/value store.

use std::collections::HashMap;

use crate::error::{describe_js, StorageError};
use crate::surface::Surface;

pub const DEFAULT_STORAGE_KEY: &str = "sketchpad";

pub trait SnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Every operation fails with `Unavailable` when the
/// browser has none (private mode, disabled storage).
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open(window: &web_sys::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl SnapshotStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: describe_js(&e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors land here like any other failure.
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: describe_js(&e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: describe_js(&e),
        })
    }
}

/// In-process store; stands in for local storage off the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[derive(Debug)]
pub struct Persistence<K> {
    store: K,
    key: String,
}

impl<K: SnapshotStore> Persistence<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// Encodes the surface and writes it under the key. An encoding failure is
    /// reported as a write failure so callers have one thing to log.
    pub fn save<S: Surface>(&mut self, surface: &S) -> Result<(), StorageError> {
        let blob = surface.snapshot().map_err(|e| StorageError::Write {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&self.key, &blob)
    }

    pub fn load(&self) -> Result<Option<String>, StorageError> {
        self.store.get(&self.key)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn save_then_load_returns_snapshot() {
        let mut surface = RecordingSurface::new(4.0, 4.0);
        surface.begin_path();
        let mut p = Persistence::new(MemoryStore::default(), DEFAULT_STORAGE_KEY);
        assert_eq!(p.load(), Ok(None));
        p.save(&surface).unwrap();
        assert_eq!(p.load().unwrap(), Some(surface.snapshot().unwrap()));
    }

    #[test]
    fn clear_forgets_snapshot() {
        let mut p = Persistence::new(MemoryStore::default(), "k");
        p.save(&RecordingSurface::new(1.0, 1.0)).unwrap();
        p.clear().unwrap();
        assert_eq!(p.load(), Ok(None));
        assert_eq!(p.key(), "k");
    }
}
