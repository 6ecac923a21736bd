//! Formatters: render the aggregate result and pick the exit status.

pub mod json;
pub mod text;

use sift_core::constants::OUTPUT_FORMATS;
use sift_core::types::AggregateResult;

use crate::output::OutputStream;

/// Status for a run with no diagnostics.
pub const EXIT_CLEAN: i32 = 0;
/// Status for a run that reported at least one diagnostic.
pub const EXIT_DIAGNOSTICS: i32 = 1;

/// Renders a finished run. The returned status is the run's status.
pub trait Formatter {
    fn name(&self) -> &'static str;

    fn format_errors(&self, result: AggregateResult, out: &mut dyn OutputStream) -> i32;
}

/// Create a formatter by name.
pub fn create_formatter(format: &str, use_color: bool) -> Option<Box<dyn Formatter>> {
    match format {
        "text" => Some(Box::new(text::TextFormatter::new(use_color))),
        "json" => Some(Box::new(json::JsonFormatter)),
        _ => None,
    }
}

/// List all available formatter names.
pub fn available_formats() -> &'static [&'static str] {
    OUTPUT_FORMATS
}

/// Shared status rule.
pub(crate) fn status_for(result: &AggregateResult) -> i32 {
    if result.is_clean() {
        EXIT_CLEAN
    } else {
        EXIT_DIAGNOSTICS
    }
}
