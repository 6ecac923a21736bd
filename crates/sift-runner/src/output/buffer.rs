//! In-memory stream that records everything written to it.

use std::sync::{Arc, Mutex};

use super::OutputStream;

/// A recorded progress protocol call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(usize),
    Advance,
    Finish,
}

#[derive(Debug, Default)]
struct Recorded {
    lines: Vec<String>,
    progress: Vec<ProgressEvent>,
}

/// Cloneable handle; clones share one record, so a caller can keep a
/// clone after boxing another into an `Output`.
#[derive(Debug, Clone, Default)]
pub struct BufferStream {
    recorded: Arc<Mutex<Recorded>>,
}

impl BufferStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.recorded
            .lock()
            .map(|r| r.lines.clone())
            .unwrap_or_default()
    }

    /// All lines joined with `\n`.
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }

    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        self.recorded
            .lock()
            .map(|r| r.progress.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, event: ProgressEvent) -> usize {
        self.progress_events()
            .iter()
            .filter(|e| std::mem::discriminant(*e) == std::mem::discriminant(&event))
            .count()
    }

    fn push(&self, event: ProgressEvent) {
        if let Ok(mut r) = self.recorded.lock() {
            r.progress.push(event);
        }
    }
}

impl OutputStream for BufferStream {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        let mut r = self
            .recorded
            .lock()
            .map_err(|_| std::io::Error::other("buffer lock poisoned"))?;
        r.lines.push(line.to_string());
        Ok(())
    }

    fn progress_start(&mut self, total: usize) {
        self.push(ProgressEvent::Start(total));
    }

    fn progress_advance(&mut self) {
        self.push(ProgressEvent::Advance);
    }

    fn progress_finish(&mut self) {
        self.push(ProgressEvent::Finish);
    }
}
