//! Diagnostics produced by the analysis engine and the per-run aggregate.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A diagnostic attached to a specific file and line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDiagnostic {
    pub file: PathBuf,
    pub line: u32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl FileDiagnostic {
    pub fn new(file: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl fmt::Display for FileDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file.display(), self.line, self.message)
    }
}

/// One item of the engine's diagnostic stream.
///
/// Serialized untagged: a global diagnostic is a bare string, a file
/// diagnostic is an object, so the shape of the value is the discriminant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Diagnostic {
    /// Not attributable to a single file (configuration problems and the like).
    Global(String),
    File(FileDiagnostic),
}

impl Diagnostic {
    pub fn global(message: impl Into<String>) -> Self {
        Self::Global(message.into())
    }

    pub fn file(file: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self::File(FileDiagnostic::new(file, line, message))
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

impl From<FileDiagnostic> for Diagnostic {
    fn from(d: FileDiagnostic) -> Self {
        Self::File(d)
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Self::Global(message)
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Self::Global(message.to_string())
    }
}

/// Everything the formatter needs, built once at the end of a run.
///
/// Fields are private so the value cannot be edited after construction;
/// the formatter takes it by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    file_diagnostics: Vec<FileDiagnostic>,
    global_diagnostics: Vec<String>,
    non_default_strictness: bool,
    inferred_any_property: bool,
    config_path: Option<PathBuf>,
}

impl AggregateResult {
    pub fn new(
        file_diagnostics: Vec<FileDiagnostic>,
        global_diagnostics: Vec<String>,
        non_default_strictness: bool,
        inferred_any_property: bool,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            file_diagnostics,
            global_diagnostics,
            non_default_strictness,
            inferred_any_property,
            config_path,
        }
    }

    pub fn file_diagnostics(&self) -> &[FileDiagnostic] {
        &self.file_diagnostics
    }

    pub fn global_diagnostics(&self) -> &[String] {
        &self.global_diagnostics
    }

    /// True when the run used a strictness level other than the default.
    pub fn non_default_strictness(&self) -> bool {
        self.non_default_strictness
    }

    /// True when some private property had an inferred `any` type that a
    /// stricter inference level could have narrowed.
    pub fn inferred_any_property(&self) -> bool {
        self.inferred_any_property
    }

    pub fn config_path(&self) -> Option<&std::path::Path> {
        self.config_path.as_deref()
    }

    pub fn total_diagnostics(&self) -> usize {
        self.file_diagnostics.len() + self.global_diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total_diagnostics() == 0
    }
}
