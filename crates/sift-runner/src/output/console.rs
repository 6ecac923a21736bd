//! Terminal-backed stream with an `indicatif` progress bar.

use std::io::Write;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::OutputStream;

const PROGRESS_TEMPLATE: &str = "{prefix} [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {elapsed_precise}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

pub struct ConsoleStream {
    target: ConsoleTarget,
    quiet: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleStream {
    pub fn new(target: ConsoleTarget, quiet: bool) -> Self {
        Self {
            target,
            quiet,
            progress: None,
        }
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        match (self.quiet, self.target) {
            (true, _) => ProgressDrawTarget::hidden(),
            (false, ConsoleTarget::Stdout) => ProgressDrawTarget::stdout(),
            (false, ConsoleTarget::Stderr) => ProgressDrawTarget::stderr(),
        }
    }
}

impl OutputStream for ConsoleStream {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        // Print above a visible bar so it is not overdrawn.
        if let Some(pb) = self.progress.as_ref().filter(|pb| !pb.is_hidden()) {
            pb.println(line);
            return Ok(());
        }
        match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        }
    }

    fn progress_start(&mut self, total: usize) {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let pb = ProgressBar::with_draw_target(Some(total as u64), self.draw_target())
            .with_style(style)
            .with_prefix("analyze");
        self.progress = Some(pb);
    }

    fn progress_advance(&mut self) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }

    fn progress_finish(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish();
        }
    }
}
