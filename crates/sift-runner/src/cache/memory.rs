//! In-process cache backend.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;
use sift_core::errors::CacheError;

use super::KeyValueCache;

/// A `HashMap` behind a mutex. Also counts writes, which is what most
/// callers want to assert on.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: Mutex<MemoryCacheInner>,
}

#[derive(Debug, Default)]
struct MemoryCacheInner {
    entries: HashMap<String, Value>,
    saves: usize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total `save` calls, including overwrites.
    pub fn save_count(&self) -> usize {
        self.inner.lock().map(|i| i.saves).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted snapshot of all keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .inner
            .lock()
            .map(|i| i.entries.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl KeyValueCache for MemoryCache {
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        inner.entries.insert(key.to_string(), value);
        inner.saves += 1;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let inner = self.inner.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.entries.get(key).cloned())
    }
}
