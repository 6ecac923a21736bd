//! Per-file modification times for incremental ("changed files") runs.

use std::path::Path;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use sift_core::constants::TIMESTAMP_KEY_PREFIX;

use crate::cache::KeyValueCache;

/// `filemtime-<absolute path>`. Falls back to the path as given when it
/// cannot be made absolute.
pub fn timestamp_cache_key(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("{TIMESTAMP_KEY_PREFIX}{}", absolute.display())
}

/// Modification time in whole seconds since the Unix epoch.
pub fn modified_epoch_secs(path: &Path) -> Option<i64> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    i64::try_from(since_epoch.as_secs()).ok()
}

/// Writes one cache entry per analyzed file when incremental mode is on.
#[derive(Clone)]
pub struct TimestampRecorder {
    cache: Option<Arc<dyn KeyValueCache>>,
}

impl TimestampRecorder {
    /// A recorder over `cache`; inert unless `incremental`.
    pub fn new(cache: Arc<dyn KeyValueCache>, incremental: bool) -> Self {
        Self {
            cache: incremental.then_some(cache),
        }
    }

    pub fn disabled() -> Self {
        Self { cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Save the file's mtime. Missing metadata and cache failures are
    /// swallowed: this only feeds a skip-unchanged optimization.
    pub fn record_timestamp(&self, path: &Path) {
        let Some(cache) = &self.cache else {
            return;
        };
        let Some(mtime) = modified_epoch_secs(path) else {
            tracing::trace!(path = %path.display(), "mtime unavailable, not cached");
            return;
        };
        let key = timestamp_cache_key(path);
        if let Err(e) = cache.save(&key, serde_json::Value::from(mtime)) {
            tracing::warn!(key = %key, error = %e, "failed to cache file timestamp");
        }
    }
}

impl std::fmt::Debug for TimestampRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimestampRecorder")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
