//! Per-file hooks for a run: progress bar or debug trace, chosen once.

use std::path::Path;

use sift_core::config::RunMode;

use crate::output::{Output, OutputStream};
use crate::timestamps::TimestampRecorder;
use crate::watchdog::MemoryWatchdog;

/// Callbacks the engine fires around each file.
pub trait RunHooks {
    /// Before the engine analyzes `path`.
    fn before_file(&mut self, _path: &Path) {}

    /// After the engine has analyzed `path`.
    fn after_file(&mut self, path: &Path);

    /// Called once by the orchestrator after the engine returns.
    fn finish(&mut self) {}
}

/// Interactive mode: lazy progress bar, periodic memory samples.
pub struct ProgressHooks<'a> {
    total: usize,
    sample_interval: usize,
    calls: usize,
    advanced: usize,
    started: bool,
    watchdog: &'a mut MemoryWatchdog,
    recorder: &'a TimestampRecorder,
    progress: &'a mut dyn OutputStream,
}

impl<'a> ProgressHooks<'a> {
    pub fn new(
        total: usize,
        sample_interval: usize,
        watchdog: &'a mut MemoryWatchdog,
        recorder: &'a TimestampRecorder,
        progress: &'a mut dyn OutputStream,
    ) -> Self {
        Self {
            total,
            sample_interval: sample_interval.max(1),
            calls: 0,
            advanced: 0,
            started: false,
            watchdog,
            recorder,
            progress,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn advanced(&self) -> usize {
        self.advanced
    }
}

impl RunHooks for ProgressHooks<'_> {
    fn after_file(&mut self, path: &Path) {
        if !self.started {
            self.progress.progress_start(self.total);
            self.started = true;
        }

        // Never run past the announced total.
        if self.advanced < self.total {
            self.progress.progress_advance();
            self.advanced += 1;
        } else {
            tracing::debug!(path = %path.display(), total = self.total, "after_file past end of file list");
        }

        if self.calls % self.sample_interval == 0 {
            self.watchdog.record_peak_usage();
        }
        self.calls += 1;

        self.recorder.record_timestamp(path);
    }

    fn finish(&mut self) {
        if self.started {
            self.progress.progress_finish();
            self.started = false;
        }
    }
}

/// Debug mode: print each path before analysis, nothing else.
pub struct DebugHooks<'a> {
    recorder: &'a TimestampRecorder,
    out: &'a mut dyn OutputStream,
}

impl<'a> DebugHooks<'a> {
    pub fn new(recorder: &'a TimestampRecorder, out: &'a mut dyn OutputStream) -> Self {
        Self { recorder, out }
    }
}

impl RunHooks for DebugHooks<'_> {
    fn before_file(&mut self, path: &Path) {
        if let Err(e) = self.out.write_line(&path.display().to_string()) {
            tracing::warn!(error = %e, "failed to write debug file line");
        }
    }

    fn after_file(&mut self, path: &Path) {
        self.recorder.record_timestamp(path);
    }
}

/// The hooks for one run.
pub enum Instrumentation<'a> {
    Progress(ProgressHooks<'a>),
    Debug(DebugHooks<'a>),
}

impl<'a> Instrumentation<'a> {
    /// Progress goes to the error stream, debug lines to standard output.
    pub fn for_mode(
        mode: RunMode,
        file_count: usize,
        sample_interval: usize,
        watchdog: &'a mut MemoryWatchdog,
        recorder: &'a TimestampRecorder,
        output: &'a mut Output,
    ) -> Self {
        match mode {
            RunMode::Interactive => Self::Progress(ProgressHooks::new(
                file_count,
                sample_interval,
                watchdog,
                recorder,
                &mut *output.stderr,
            )),
            RunMode::Debug => Self::Debug(DebugHooks::new(recorder, &mut *output.stdout)),
        }
    }

    pub fn mode(&self) -> RunMode {
        match self {
            Self::Progress(_) => RunMode::Interactive,
            Self::Debug(_) => RunMode::Debug,
        }
    }
}

impl RunHooks for Instrumentation<'_> {
    fn before_file(&mut self, path: &Path) {
        match self {
            Self::Progress(h) => h.before_file(path),
            Self::Debug(h) => h.before_file(path),
        }
    }

    fn after_file(&mut self, path: &Path) {
        match self {
            Self::Progress(h) => h.after_file(path),
            Self::Debug(h) => h.after_file(path),
        }
    }

    fn finish(&mut self) {
        match self {
            Self::Progress(h) => h.finish(),
            Self::Debug(h) => h.finish(),
        }
    }
}
