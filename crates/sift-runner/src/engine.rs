//! The analysis engine seam.

use std::path::PathBuf;

use sift_core::config::AnalysisScope;
use sift_core::errors::EngineError;
use sift_core::types::Diagnostic;

use crate::instrumentation::RunHooks;
use crate::observer::NodeObserver;

/// Everything one engine call receives.
pub struct AnalyzeRequest<'a> {
    pub files: &'a [PathBuf],
    pub scope: AnalysisScope,
    /// Call `before_file` right before and `after_file` right after each file.
    pub hooks: &'a mut dyn RunHooks,
    pub debug: bool,
    /// Call for every syntax node visited.
    pub observer: &'a mut dyn NodeObserver,
}

/// An analysis engine.
///
/// `analyze` is synchronous: it returns only after every file has been
/// processed, driving the hooks and observer from its own loop.
pub trait AnalysisEngine {
    fn analyze(&mut self, request: AnalyzeRequest<'_>) -> Result<Vec<Diagnostic>, EngineError>;
}
