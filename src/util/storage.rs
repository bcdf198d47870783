//! Persistent key/value storage for session tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists the access token under `token` and the refresh
//! token under `refreshToken`. In the browser that is `localStorage`; tests and
//! non-browser builds use [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Storage failures (quota, disabled storage, private mode) are logged and
//! otherwise ignored: a missing token simply reads as "signed out".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Minimal string storage used by the session store.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Arc::new(Mutex::new(map)) }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`. Outside the `csr` build every read misses and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(error) => {
            log::warn!("localStorage unavailable: {error:?}");
            None
        }
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(error) => {
                    log::warn!("localStorage read failed: key={key} error={error:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("browser storage disabled: get key={key}");
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage()
                && let Err(error) = storage.set_item(key, value)
            {
                log::warn!("localStorage write failed: key={key} error={error:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("browser storage disabled: set key={key} len={}", value.len());
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage()
                && let Err(error) = storage.remove_item(key)
            {
                log::warn!("localStorage remove failed: key={key} error={error:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("browser storage disabled: remove key={key}");
        }
    }
}
