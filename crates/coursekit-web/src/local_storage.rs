use coursekit_storage::backend::KeyValueStore;
use coursekit_storage::error::StorageError;
use coursekit_storage::memory::MemoryStore;

use crate::error::js_message;

/// `window.localStorage`, scoped to the page's origin.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new(storage: web_sys::Storage) -> Self {
        Self { storage }
    }

    /// `None` when the browser refuses access (blocked cookies, some
    /// private-browsing modes).
    pub fn from_window(window: &web_sys::Window) -> Option<Self> {
        window.local_storage().ok().flatten().map(Self::new)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: js_message(&e),
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            message: js_message(&e),
        })
    }
}

/// The backend a page actually runs on: `localStorage` when available,
/// otherwise an in-memory store so the page keeps working for the visit.
pub enum PageStorage {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl PageStorage {
    pub fn detect(window: &web_sys::Window) -> Self {
        match LocalStorage::from_window(window) {
            Some(local) => PageStorage::Local(local),
            None => {
                tracing::warn!("localStorage unavailable, progress will not survive a reload");
                PageStorage::Memory(MemoryStore::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, PageStorage::Local(_))
    }
}

impl KeyValueStore for PageStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            PageStorage::Local(s) => s.get_item(key),
            PageStorage::Memory(s) => s.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            PageStorage::Local(s) => s.set_item(key, value),
            PageStorage::Memory(s) => s.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            PageStorage::Local(s) => s.remove_item(key),
            PageStorage::Memory(s) => s.remove_item(key),
        }
    }
}
