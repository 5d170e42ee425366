//! Failure-isolated key-value persistence over browser `localStorage`.
//!
//! The rest of the crate is written as if persistence always succeeds;
//! this module's job is to make that assumption safe. Every fault a
//! backend can produce (storage disabled, quota exceeded, no browser
//! environment at all) is caught here, logged as a warning, and converted
//! into an absent value or an `Err` the caller can pattern-match into a
//! default. Nothing in this module panics.
//!
//! ERROR HANDLING
//! ==============
//! `StorageBackend` implementations report faults as `StorageError`.
//! `PersistentStore` downgrades read faults to `None` and surfaces write
//! faults as `Result` so callers can ignore them without unwinding.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// A fault from the underlying key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage exists in this environment (storage disabled, or a
    /// non-browser build).
    #[error("storage is not available in this environment")]
    Unavailable,
    /// The store exists but refused the operation (quota, security).
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// Raw key-value access. Implementations must not panic.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the store cannot be reached at all.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the store is unreachable or refuses
    /// the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Browser `localStorage` backend.
///
/// On non-web builds every call reports `StorageError::Unavailable`, so
/// callers fall back to in-memory defaults and the page still works.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "web")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "web")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "web")]
        {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory backend for native tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed an entry, e.g. to simulate state left by a previous session.
    pub fn seed(&self, key: &str, value: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Failure-isolating wrapper around a [`StorageBackend`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PersistentStore<B> {
    backend: B,
}

impl<B: StorageBackend> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the value under `key`. Any backend fault is logged and
    /// reported as absent.
    pub fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("could not read {key} from storage: {e}");
                None
            }
        }
    }

    /// Write `value` under `key`. Faults are logged; the returned error
    /// exists for callers that want to know, and ignoring it is safe.
    ///
    /// # Errors
    ///
    /// Returns the backend's `StorageError` when the write did not stick.
    pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Err(e) = self.backend.set(key, value) {
            log::warn!("could not write {key} to storage: {e}");
            return Err(e);
        }
        Ok(())
    }
}
