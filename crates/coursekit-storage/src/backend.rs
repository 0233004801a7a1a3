use crate::error::StorageError;

/// A durable string-keyed store scoped to one origin.
///
/// In the browser this is `window.localStorage`; tests and pages where
/// `localStorage` is blocked use [`crate::memory::MemoryStore`].
pub trait KeyValueStore {
    /// Read the raw value under `key`. `Ok(None)` when the key is unset.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an unset key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
