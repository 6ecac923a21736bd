//! Key/value cache errors.

use super::error_code::{self, SiftErrorCode};

/// Errors raised by cache backends.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Failed to encode value for {key}: {message}")]
    Serialization { key: String, message: String },

    #[error("Cache lock poisoned")]
    Poisoned,
}

impl SiftErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        error_code::CACHE_ERROR
    }
}
