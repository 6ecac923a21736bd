//! Shared constants.

/// Files between memory samples in interactive mode.
pub const DEFAULT_MEMORY_SAMPLE_INTERVAL: usize = 100;

/// File name of the memory ceiling record inside the temp directory.
pub const CEILING_FILE_NAME: &str = "sift-memory-ceiling";

/// File name of the incremental-mode cache database inside the temp directory.
pub const CACHE_FILE_NAME: &str = "sift-cache.sqlite";

/// Prefix of timestamp cache keys: `filemtime-<absolute path>`.
pub const TIMESTAMP_KEY_PREFIX: &str = "filemtime-";

/// Bytes per megabyte used for the ceiling record.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Project config file name looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "sift.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Formatter names accepted by `output.format`.
pub const OUTPUT_FORMATS: &[&str] = &["text", "json"];
