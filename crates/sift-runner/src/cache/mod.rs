//! Key/value cache used for incremental bookkeeping.

pub mod memory;
pub mod sqlite;

use serde_json::Value;
use sift_core::errors::CacheError;

pub use memory::MemoryCache;
pub use sqlite::SqliteCache;

/// Minimal key/value contract. Values are arbitrary JSON.
pub trait KeyValueCache: Send + Sync {
    /// Insert or overwrite `key`.
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError>;

    fn load(&self, key: &str) -> Result<Option<Value>, CacheError>;
}
