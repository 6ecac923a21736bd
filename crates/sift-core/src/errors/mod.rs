//! Error types for Sift.
//! One enum per subsystem, each with a stable error code.

pub mod cache_error;
pub mod config_error;
pub mod error_code;
pub mod run_error;

pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use error_code::SiftErrorCode;
pub use run_error::{EngineError, RunError};
