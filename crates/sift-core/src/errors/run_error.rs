//! Errors surfaced by a run.

use super::error_code::{self, SiftErrorCode};
use super::{CacheError, ConfigError};

/// Opaque error returned by an analysis engine. Relayed unchanged.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that escape `RunOrchestrator::run` and `from_config`.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The engine failed. The inner error is passed through as-is.
    #[error(transparent)]
    Engine(EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl SiftErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Engine(_) => error_code::ENGINE_ERROR,
            Self::Config(e) => e.error_code(),
            Self::Cache(e) => e.error_code(),
        }
    }
}
