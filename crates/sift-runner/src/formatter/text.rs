//! Text formatter: one line per diagnostic plus a summary.

use sift_core::types::AggregateResult;

use super::{status_for, Formatter};
use crate::output::OutputStream;

pub struct TextFormatter {
    pub use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn render(&self, result: &AggregateResult) -> Vec<String> {
        let mut lines = Vec::with_capacity(result.total_diagnostics() + 3);

        for message in result.global_diagnostics() {
            lines.push(format!("{}: {message}", self.paint("31", "error")));
        }
        for d in result.file_diagnostics() {
            lines.push(format!(
                "{}:{}: {}",
                d.file.display(),
                d.line,
                d.message
            ));
        }

        if result.inferred_any_property() && !result.non_default_strictness() {
            lines.push(format!(
                "{}: some private properties have an inferred `any` type; strict property inference may report more",
                self.paint("36", "hint")
            ));
        }
        if let Some(path) = result.config_path() {
            lines.push(format!("using config {}", path.display()));
        }

        let total = result.total_diagnostics();
        lines.push(if total == 0 {
            "No errors found.".to_string()
        } else {
            format!(
                "{total} error{} ({} in files, {} global)",
                if total == 1 { "" } else { "s" },
                result.file_diagnostics().len(),
                result.global_diagnostics().len()
            )
        });
        lines
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn format_errors(&self, result: AggregateResult, out: &mut dyn OutputStream) -> i32 {
        for line in self.render(&result) {
            if let Err(e) = out.write_line(&line) {
                tracing::warn!(error = %e, "failed to write report line");
                break;
            }
        }
        status_for(&result)
    }
}
