//! The memory ceiling record.

use std::path::{Path, PathBuf};

use sift_core::constants::BYTES_PER_MB;

use super::guard::CeilingGuard;
use super::sampler::MemorySampler;

/// Whole megabytes, rounded up.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes.div_ceil(BYTES_PER_MB)
}

/// The record's on-disk form: `"<n> MB"`.
pub fn format_ceiling(mb: u64) -> String {
    format!("{mb} MB")
}

/// Parse a ceiling file. `Ok(None)` when it does not exist or is malformed.
pub fn read_ceiling(path: &Path) -> std::io::Result<Option<u64>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    Ok(text
        .trim()
        .strip_suffix("MB")
        .and_then(|n| n.trim().parse().ok()))
}

/// Samples process memory and keeps the highest value in the ceiling file.
pub struct MemoryWatchdog {
    path: PathBuf,
    sampler: Box<dyn MemorySampler>,
    peak_mb: Option<u64>,
}

impl MemoryWatchdog {
    pub fn new(path: impl Into<PathBuf>, sampler: Box<dyn MemorySampler>) -> Self {
        Self {
            path: path.into(),
            sampler,
            peak_mb: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Highest value recorded so far.
    pub fn peak_mb(&self) -> Option<u64> {
        self.peak_mb
    }

    /// Sample memory and overwrite the ceiling file with the running max.
    ///
    /// The file never goes down: a lower sample rewrites the previous peak.
    /// Write failures are logged and dropped.
    pub fn record_peak_usage(&mut self) -> Option<u64> {
        match self.sampler.peak_bytes() {
            Some(bytes) => {
                let mb = bytes_to_mb(bytes);
                self.peak_mb = Some(self.peak_mb.map_or(mb, |prev| prev.max(mb)));
            }
            None => tracing::debug!("memory sample unavailable"),
        }

        let peak = self.peak_mb?;
        if let Err(e) = std::fs::write(&self.path, format_ceiling(peak)) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write memory ceiling");
        } else {
            tracing::trace!(peak_memory_mb = peak, "memory ceiling recorded");
        }
        Some(peak)
    }

    /// Scoped cleanup for this watchdog's ceiling file.
    pub fn guard(&self) -> CeilingGuard {
        CeilingGuard::new(self.path.clone())
    }
}
