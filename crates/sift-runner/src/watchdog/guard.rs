//! Scoped cleanup of the ceiling file.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Message fragments that mark a failure as memory exhaustion.
///
/// Best-effort: allocator aborts never unwind at all, so this only
/// catches panics raised by code that reports OOM as a panic.
const OUT_OF_MEMORY_MARKERS: &[&str] = &[
    "out of memory",
    "memory allocation of",
    "allowed memory size",
    "cannot allocate memory",
    "allocation failed",
    "capacity overflow",
];

/// Whether a fatal error message looks like memory exhaustion.
pub fn is_out_of_memory_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    OUT_OF_MEMORY_MARKERS.iter().any(|m| lower.contains(m))
}

/// Text of a panic payload, when it is a string.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(s) = payload.downcast_ref::<&str>() {
        return Some(*s);
    }
    payload.downcast_ref::<String>().map(String::as_str)
}

/// Deletes the ceiling file when dropped, unless preserved.
///
/// Drop runs on normal return, on `?` propagation, and while unwinding a
/// panic. A process abort skips it, which leaves the file behind.
#[derive(Debug)]
pub struct CeilingGuard {
    path: PathBuf,
    preserve: bool,
}

impl CeilingGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            preserve: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the file as evidence of the ceiling reached.
    pub fn preserve(&mut self) {
        self.preserve = true;
    }

    pub fn is_preserved(&self) -> bool {
        self.preserve
    }

    /// Run `f`; if it panics with an out-of-memory message, preserve the
    /// file, then resume the panic unchanged.
    pub fn supervise<T>(&mut self, f: impl FnOnce() -> T) -> T {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => value,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                if message.is_some_and(is_out_of_memory_message) {
                    tracing::error!(path = %self.path.display(), "run aborted by memory exhaustion, keeping ceiling record");
                    self.preserve();
                }
                panic::resume_unwind(payload)
            }
        }
    }
}

impl Drop for CeilingGuard {
    fn drop(&mut self) {
        if self.preserve {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "could not remove ceiling record");
            }
        }
    }
}
