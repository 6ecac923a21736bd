//! SiftErrorCode trait and the code constants.

/// Trait for mapping Sift errors to stable error code strings.
/// Every error enum implements this so callers can match on a code
/// instead of parsing messages.
pub trait SiftErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CACHE_ERROR: &str = "CACHE_ERROR";
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
