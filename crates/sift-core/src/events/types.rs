//! Event payload types.

use std::path::PathBuf;

use crate::config::RunMode;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub file_count: usize,
    pub mode: RunMode,
    pub incremental: bool,
}

/// Payload for `on_ceiling_recorded`.
#[derive(Debug, Clone)]
pub struct CeilingRecordedEvent {
    pub path: PathBuf,
    pub peak_mb: u64,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub file_count: usize,
    pub file_diagnostics: usize,
    pub global_diagnostics: usize,
    pub inferred_any_property: bool,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
