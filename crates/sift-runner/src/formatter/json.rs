//! JSON formatter: one machine-readable document.

use std::path::Path;

use serde::Serialize;
use sift_core::types::{AggregateResult, FileDiagnostic};

use super::{status_for, Formatter};
use crate::output::OutputStream;

#[derive(Serialize)]
struct JsonReport<'a> {
    status: i32,
    total: usize,
    files: &'a [FileDiagnostic],
    global: &'a [String],
    non_default_strictness: bool,
    inferred_any_property: bool,
    config_path: Option<&'a Path>,
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format_errors(&self, result: AggregateResult, out: &mut dyn OutputStream) -> i32 {
        let status = status_for(&result);
        let report = JsonReport {
            status,
            total: result.total_diagnostics(),
            files: result.file_diagnostics(),
            global: result.global_diagnostics(),
            non_default_strictness: result.non_default_strictness(),
            inferred_any_property: result.inferred_any_property(),
            config_path: result.config_path(),
        };

        match serde_json::to_string_pretty(&report) {
            Ok(rendered) => {
                if let Err(e) = out.write_line(&rendered) {
                    tracing::warn!(error = %e, "failed to write report");
                }
            }
            Err(e) => tracing::error!(error = %e, "failed to serialize report"),
        }
        status
    }
}
