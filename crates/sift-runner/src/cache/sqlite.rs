//! SQLite cache backend: one table, insert-or-replace writes.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use sift_core::errors::CacheError;

use super::KeyValueCache;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS cache_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
)";

fn sqlite_err(e: rusqlite::Error) -> CacheError {
    CacheError::SqliteError {
        message: e.to_string(),
    }
}

/// Persistent key/value cache stored in a single SQLite file.
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        Self::with_connection(Connection::open(path).map_err(sqlite_err)?)
    }

    pub fn open_in_memory() -> Result<Self, CacheError> {
        Self::with_connection(Connection::open_in_memory().map_err(sqlite_err)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, CacheError> {
        conn.execute_batch(SCHEMA).map_err(sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize, CacheError> {
        let conn = self.conn.lock().map_err(|_| CacheError::Poisoned)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM cache_entries", [], |row| row.get(0))
            .map_err(sqlite_err)?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueCache for SqliteCache {
    fn save(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let encoded = serde_json::to_string(&value).map_err(|e| CacheError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        let conn = self.conn.lock().map_err(|_| CacheError::Poisoned)?;
        conn.prepare_cached(
            "INSERT OR REPLACE INTO cache_entries (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
        )
        .and_then(|mut stmt| stmt.execute(params![key, encoded, now]))
        .map_err(sqlite_err)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, CacheError> {
        let conn = self.conn.lock().map_err(|_| CacheError::Poisoned)?;
        let raw: Option<String> = conn
            .query_row(
                "SELECT value FROM cache_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sqlite_err)?;

        raw.map(|text| {
            serde_json::from_str(&text).map_err(|e| CacheError::Serialization {
                key: key.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
    }
}
