//! Splits the engine's diagnostic stream into file-scoped and global parts.

use sift_core::types::{Diagnostic, FileDiagnostic};

/// Split by variant, keeping relative order within each side.
pub fn partition_diagnostics(diagnostics: Vec<Diagnostic>) -> (Vec<FileDiagnostic>, Vec<String>) {
    let mut file_scoped = Vec::new();
    let mut global = Vec::new();
    for diagnostic in diagnostics {
        match diagnostic {
            Diagnostic::File(d) => file_scoped.push(d),
            Diagnostic::Global(message) => global.push(message),
        }
    }
    (file_scoped, global)
}
