//! Run configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CACHE_FILE_NAME, CEILING_FILE_NAME, DEFAULT_MEMORY_SAMPLE_INTERVAL};

/// How a run reports per-file progress. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Progress bar plus periodic memory sampling.
    #[default]
    Interactive,
    /// One line per file before it is analyzed, no progress bar.
    Debug,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interactive" => Ok(Self::Interactive),
            "debug" | "verbose" => Ok(Self::Debug),
            other => Err(format!("unknown run mode '{other}'")),
        }
    }
}

/// Whether the engine reports on the listed files only or the whole project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisScope {
    #[default]
    Files,
    Project,
}

impl FromStr for AnalysisScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "files" => Ok(Self::Files),
            "project" => Ok(Self::Project),
            other => Err(format!("unknown analysis scope '{other}'")),
        }
    }
}

/// Analysis strictness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Lenient,
    #[default]
    Standard,
    /// Enables precise property inference.
    Strict,
}

impl Strictness {
    pub fn is_default(self) -> bool {
        self == Strictness::default()
    }
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown strictness '{other}'")),
        }
    }
}

/// Configuration for a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Interactive progress or verbose debug output. Default: interactive.
    pub mode: Option<RunMode>,
    /// Persist per-file modification times ("changed files" mode). Default: false.
    pub incremental: Option<bool>,
    /// Default: files.
    pub scope: Option<AnalysisScope>,
    /// Default: standard.
    pub strictness: Option<Strictness>,
    /// Files between memory samples in interactive mode. Default: 100.
    pub memory_sample_interval: Option<usize>,
    /// Where the memory ceiling record is written. Default: `<tmp>/sift-memory-ceiling`.
    pub ceiling_path: Option<PathBuf>,
    /// SQLite file holding file timestamps between incremental runs.
    /// Default: `<tmp>/sift-cache.sqlite`.
    pub cache_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn effective_mode(&self) -> RunMode {
        self.mode.unwrap_or_default()
    }

    pub fn effective_incremental(&self) -> bool {
        self.incremental.unwrap_or(false)
    }

    pub fn effective_scope(&self) -> AnalysisScope {
        self.scope.unwrap_or_default()
    }

    pub fn effective_strictness(&self) -> Strictness {
        self.strictness.unwrap_or_default()
    }

    pub fn effective_memory_sample_interval(&self) -> usize {
        self.memory_sample_interval.unwrap_or(DEFAULT_MEMORY_SAMPLE_INTERVAL)
    }

    pub fn effective_ceiling_path(&self) -> PathBuf {
        self.ceiling_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(CEILING_FILE_NAME))
    }

    pub fn effective_cache_path(&self) -> PathBuf {
        self.cache_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(CACHE_FILE_NAME))
    }
}
