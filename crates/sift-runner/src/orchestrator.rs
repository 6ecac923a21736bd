//! Run orchestrator: one blocking engine call, instrumented, then one
//! formatter call.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use sift_core::config::{LoadedConfig, RunConfig, RunMode};
use sift_core::errors::{ConfigError, RunError, SiftErrorCode};
use sift_core::events::types::{CeilingRecordedEvent, ErrorEvent, RunCompleteEvent, RunStartedEvent};
use sift_core::events::{EventDispatcher, SiftEventHandler};
use sift_core::types::AggregateResult;

use crate::cache::{KeyValueCache, MemoryCache, SqliteCache};
use crate::engine::{AnalysisEngine, AnalyzeRequest};
use crate::formatter::{available_formats, create_formatter, Formatter};
use crate::instrumentation::{Instrumentation, RunHooks};
use crate::observer::{InferenceFlag, InferenceObserver};
use crate::output::Output;
use crate::partition::partition_diagnostics;
use crate::timestamps::TimestampRecorder;
use crate::watchdog::{MemorySampler, MemoryWatchdog, ProcessMemorySampler};

/// Where a run currently is. Advances strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    /// Ceiling recorded, cleanup armed.
    Init,
    /// Hooks and observer built.
    Instrumented,
    /// Inside the engine call.
    Running,
    /// Progress closed, diagnostics partitioned.
    Finalizing,
    /// Handed to the formatter.
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Instrumented => "instrumented",
            Self::Running => "running",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn transition(phase: &mut RunPhase, next: RunPhase) {
    tracing::debug!(from = %phase, to = %next, "run phase");
    *phase = next;
}

/// Drives an engine over a file list and reports through a formatter.
pub struct RunOrchestrator<E: AnalysisEngine> {
    engine: E,
    config: RunConfig,
    config_path: Option<PathBuf>,
    cache: Arc<dyn KeyValueCache>,
    watchdog: MemoryWatchdog,
    output: Output,
    formatter: Box<dyn Formatter>,
    events: EventDispatcher,
    phase: Option<RunPhase>,
}

impl<E: AnalysisEngine> RunOrchestrator<E> {
    /// An orchestrator with an in-memory cache and the process memory sampler.
    pub fn new(engine: E, config: RunConfig, output: Output, formatter: Box<dyn Formatter>) -> Self {
        let watchdog = MemoryWatchdog::new(
            config.effective_ceiling_path(),
            Box::new(ProcessMemorySampler::new()),
        );
        Self {
            engine,
            config,
            config_path: None,
            cache: Arc::new(MemoryCache::new()),
            watchdog,
            output,
            formatter,
            events: EventDispatcher::new(),
            phase: None,
        }
    }

    /// Build from a resolved config: console output, the configured
    /// formatter, and a SQLite timestamp cache when incremental mode is on.
    pub fn from_config(engine: E, loaded: &LoadedConfig) -> Result<Self, RunError> {
        let output_config = &loaded.config.output;
        let format = output_config.effective_format();
        let formatter = create_formatter(format, output_config.effective_color()).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "output.format".to_string(),
                message: format!(
                    "unknown format '{format}', expected one of: {}",
                    available_formats().join(", ")
                ),
            }
        })?;
        let run_config = &loaded.config.run;
        let output = Output::console(output_config.effective_quiet());
        let mut orchestrator = Self::new(engine, run_config.clone(), output, formatter)
            .with_config_path(loaded.source.clone());

        if run_config.effective_incremental() {
            let cache_path = run_config.effective_cache_path();
            let cache = SqliteCache::open(&cache_path)?;
            tracing::debug!(path = %cache_path.display(), "timestamp cache opened");
            orchestrator = orchestrator.with_cache(Arc::new(cache));
        }
        Ok(orchestrator)
    }

    pub fn with_cache(mut self, cache: Arc<dyn KeyValueCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_sampler(mut self, sampler: Box<dyn MemorySampler>) -> Self {
        self.watchdog = MemoryWatchdog::new(self.config.effective_ceiling_path(), sampler);
        self
    }

    /// Path reported to the formatter as the active configuration file.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_event_handler(mut self, handler: Arc<dyn SiftEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    /// Phase of the current or last run; `None` before the first run.
    pub fn phase(&self) -> Option<RunPhase> {
        self.phase
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn ceiling_path(&self) -> &Path {
        self.watchdog.path()
    }

    /// Analyze `files` and return the formatter's status.
    ///
    /// Engine errors are returned unchanged as `RunError::Engine`; engine
    /// panics are resumed after the ceiling guard has inspected them.
    /// Nothing is retried.
    pub fn run(&mut self, files: &[PathBuf]) -> Result<i32, RunError> {
        let started = Instant::now();
        let mode = self.config.effective_mode();
        let incremental = self.config.effective_incremental();

        let phase = self.phase.insert(RunPhase::Init);
        tracing::debug!(to = %phase, "run phase");
        self.events.emit_run_started(&RunStartedEvent {
            file_count: files.len(),
            mode,
            incremental,
        });
        if let Some(peak_mb) = self.watchdog.record_peak_usage() {
            self.events.emit_ceiling_recorded(&CeilingRecordedEvent {
                path: self.watchdog.path().to_path_buf(),
                peak_mb,
            });
        }
        let mut guard = self.watchdog.guard();

        transition(phase, RunPhase::Instrumented);
        let flag = InferenceFlag::new();
        let mut observer = InferenceObserver::new(flag.clone());
        let recorder = TimestampRecorder::new(Arc::clone(&self.cache), incremental);
        let mut hooks = Instrumentation::for_mode(
            mode,
            files.len(),
            self.config.effective_memory_sample_interval(),
            &mut self.watchdog,
            &recorder,
            &mut self.output,
        );

        transition(phase, RunPhase::Running);
        tracing::info!(files_analyzed = files.len(), mode = %mode, incremental, "starting analysis");
        let engine_started = Instant::now();
        let scope = self.config.effective_scope();
        let engine = &mut self.engine;
        let outcome = guard.supervise(|| {
            engine.analyze(AnalyzeRequest {
                files,
                scope,
                hooks: &mut hooks,
                debug: mode == RunMode::Debug,
                observer: &mut observer,
            })
        });
        let engine_duration_ms = elapsed_ms(engine_started);

        transition(phase, RunPhase::Finalizing);
        hooks.finish();
        drop(hooks);

        let diagnostics = match outcome {
            Ok(diagnostics) => diagnostics,
            Err(e) => {
                let err = RunError::Engine(e);
                tracing::error!(error = %err, engine_duration_ms, "analysis engine failed");
                self.events.emit_error(&ErrorEvent {
                    message: err.to_string(),
                    error_code: err.error_code().to_string(),
                });
                return Err(err);
            }
        };

        let (file_diagnostics, global_diagnostics) = partition_diagnostics(diagnostics);
        let result = AggregateResult::new(
            file_diagnostics,
            global_diagnostics,
            !self.config.effective_strictness().is_default(),
            flag.is_set(),
            self.config_path.clone(),
        );
        self.events.emit_run_complete(&RunCompleteEvent {
            file_count: files.len(),
            file_diagnostics: result.file_diagnostics().len(),
            global_diagnostics: result.global_diagnostics().len(),
            inferred_any_property: result.inferred_any_property(),
            duration_ms: elapsed_ms(started),
        });
        tracing::info!(
            file_diagnostics = result.file_diagnostics().len(),
            global_diagnostics = result.global_diagnostics().len(),
            peak_memory_mb = ?self.watchdog.peak_mb(),
            engine_duration_ms,
            "analysis finished"
        );

        transition(phase, RunPhase::Done);
        let status = self.formatter.format_errors(result, &mut *self.output.stdout);
        tracing::debug!(exit_status = status, formatter = self.formatter.name(), "report written");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_is_small_for_recent_instant() {
        assert!(elapsed_ms(Instant::now()) < 60_000);
    }

    #[test]
    fn phases_are_ordered() {
        assert!(RunPhase::Init < RunPhase::Running);
        assert!(RunPhase::Finalizing < RunPhase::Done);
        assert_eq!(RunPhase::Instrumented.to_string(), "instrumented");
    }
}
