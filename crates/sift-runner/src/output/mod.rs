//! Output streams: line writes plus a progress indicator protocol.

pub mod buffer;
pub mod console;

pub use buffer::{BufferStream, ProgressEvent};
pub use console::{ConsoleStream, ConsoleTarget};

/// One addressable output stream.
pub trait OutputStream {
    fn write_line(&mut self, line: &str) -> std::io::Result<()>;

    /// Begin a progress indicator of `total` units.
    fn progress_start(&mut self, total: usize);

    fn progress_advance(&mut self);

    /// Close the indicator. No-op when none is active.
    fn progress_finish(&mut self);
}

/// The standard and error streams of a run.
pub struct Output {
    pub stdout: Box<dyn OutputStream>,
    pub stderr: Box<dyn OutputStream>,
}

impl Output {
    pub fn new(stdout: Box<dyn OutputStream>, stderr: Box<dyn OutputStream>) -> Self {
        Self { stdout, stderr }
    }

    /// Process stdout/stderr. `quiet` hides progress bars.
    pub fn console(quiet: bool) -> Self {
        Self {
            stdout: Box::new(ConsoleStream::new(ConsoleTarget::Stdout, quiet)),
            stderr: Box::new(ConsoleStream::new(ConsoleTarget::Stderr, quiet)),
        }
    }
}
