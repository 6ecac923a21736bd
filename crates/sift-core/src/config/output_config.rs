//! Output configuration.

use serde::{Deserialize, Serialize};

/// Formatter and terminal settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Formatter name. Default: "text".
    pub format: Option<String>,
    /// ANSI colors in text output. Default: true.
    pub color: Option<bool>,
    /// Suppress the progress bar. Default: false.
    pub quiet: Option<bool>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn effective_quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}
