use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;

use crate::StoreError;

/// Minimal string key-value storage, the server-side stand-in for browser
/// local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key).await
    }
}

/// In-memory store. Clones share the same entries.
///
/// The store can be switched off or given a byte quota so callers can
/// exercise their storage failure paths.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total size of keys and values in bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }

        self.entries
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries()?;

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();

            if used + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }

        entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);

        Ok(())
    }
}

/// View of a store where every key is prefixed with a scope, so each
/// visitor sees its own fixed keys.
#[derive(Clone)]
pub struct Scoped {
    inner: SharedStore,
    scope: String,
}

impl Scoped {
    pub fn new(inner: SharedStore, scope: impl Into<String>) -> Self {
        Self {
            inner,
            scope: scope.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}:{key}", self.scope)
    }
}

#[async_trait]
impl KeyValueStore for Scoped {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(&self.key(key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set(&self.key(key), value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(&self.key(key)).await
    }
}
