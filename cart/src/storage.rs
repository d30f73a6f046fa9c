//! Key-value persistence seam for the cart store.
//!
//! The store never touches `localStorage` directly; it goes through
//! [`KeyValueStore`]. [`MemoryStorage`] backs tests and server rendering,
//! and [`BrowserStorage`] (feature `web`) wraps `window.localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! The browser API reports failures as opaque `JsValue`s (quota exceeded,
//! storage disabled by privacy settings). They are flattened into
//! [`StorageError::Backend`] with the operation and key attached.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Error returned by a [`KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area could be obtained (no window, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected an operation.
    #[error("storage {op} failed for key {key:?}: {message}")]
    Backend { op: &'static str, key: String, message: String },
}

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage. Used by tests and by server-side rendering, where no
/// browser storage exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with a single entry.
    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// `window.localStorage` for the current page.
#[cfg(feature = "web")]
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

#[cfg(feature = "web")]
impl BrowserStorage {
    /// Open the page's local storage area.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser refuses access to local storage.
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".to_owned())),
            Err(e) => Err(StorageError::Unavailable(js_message(&e))),
        }
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| backend_error("get", key, &e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| backend_error("set", key, &e))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| backend_error("remove", key, &e))
    }
}

#[cfg(feature = "web")]
fn backend_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend { op, key: key.to_owned(), message: js_message(err) }
}

#[cfg(feature = "web")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
