//! Top-level Sift configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AnalysisScope, OutputConfig, RunConfig, RunMode, Strictness};
use crate::constants::{OUTPUT_FORMATS, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SIFT_*`)
/// 3. Project config (`sift.toml` in project root)
/// 4. User config (`~/.sift/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiftConfig {
    pub run: RunConfig,
    pub output: OutputConfig,
}

/// A resolved config plus the project file it was read from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: SiftConfig,
    pub source: Option<PathBuf>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub mode: Option<RunMode>,
    pub incremental: Option<bool>,
    pub scope: Option<AnalysisScope>,
    pub strictness: Option<Strictness>,
    pub format: Option<String>,
    pub quiet: Option<bool>,
}

impl SiftConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let source = if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            Some(project_config_path)
        } else {
            None
        };

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(source = ?source, "configuration resolved");
        Ok(LoadedConfig { config, source })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SiftConfig) -> Result<(), ConfigError> {
        if config.run.memory_sample_interval == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "run.memory_sample_interval".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref format) = config.output.format {
            if !OUTPUT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message: format!(
                        "unknown format '{format}', expected one of: {}",
                        OUTPUT_FORMATS.join(", ")
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.sift/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".sift").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut SiftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SiftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut SiftConfig, other: &SiftConfig) {
        // Run
        if other.run.mode.is_some() {
            base.run.mode = other.run.mode;
        }
        if other.run.incremental.is_some() {
            base.run.incremental = other.run.incremental;
        }
        if other.run.scope.is_some() {
            base.run.scope = other.run.scope;
        }
        if other.run.strictness.is_some() {
            base.run.strictness = other.run.strictness;
        }
        if other.run.memory_sample_interval.is_some() {
            base.run.memory_sample_interval = other.run.memory_sample_interval;
        }
        if other.run.ceiling_path.is_some() {
            base.run.ceiling_path = other.run.ceiling_path.clone();
        }
        if other.run.cache_path.is_some() {
            base.run.cache_path = other.run.cache_path.clone();
        }

        // Output
        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
        if other.output.color.is_some() {
            base.output.color = other.output.color;
        }
        if other.output.quiet.is_some() {
            base.output.quiet = other.output.quiet;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SIFT_RUN_MODE`, `SIFT_OUTPUT_FORMAT`, etc.
    fn apply_env_overrides(config: &mut SiftConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parsed::<RunMode>("SIFT_RUN_MODE")? {
            config.run.mode = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("SIFT_RUN_INCREMENTAL")? {
            config.run.incremental = Some(v);
        }
        if let Some(v) = env_parsed::<AnalysisScope>("SIFT_RUN_SCOPE")? {
            config.run.scope = Some(v);
        }
        if let Some(v) = env_parsed::<Strictness>("SIFT_RUN_STRICTNESS")? {
            config.run.strictness = Some(v);
        }
        if let Some(v) = env_parsed::<usize>("SIFT_RUN_MEMORY_SAMPLE_INTERVAL")? {
            config.run.memory_sample_interval = Some(v);
        }
        if let Some(v) = std::env::var_os("SIFT_RUN_CEILING_PATH") {
            config.run.ceiling_path = Some(PathBuf::from(v));
        }
        if let Some(v) = std::env::var_os("SIFT_RUN_CACHE_PATH") {
            config.run.cache_path = Some(PathBuf::from(v));
        }
        if let Ok(v) = std::env::var("SIFT_OUTPUT_FORMAT") {
            config.output.format = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("SIFT_OUTPUT_COLOR")? {
            config.output.color = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("SIFT_OUTPUT_QUIET")? {
            config.output.quiet = Some(v);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SiftConfig, cli: &CliOverrides) {
        if let Some(v) = cli.mode {
            config.run.mode = Some(v);
        }
        if let Some(v) = cli.incremental {
            config.run.incremental = Some(v);
        }
        if let Some(v) = cli.scope {
            config.run.scope = Some(v);
        }
        if let Some(v) = cli.strictness {
            config.run.strictness = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
        if let Some(v) = cli.quiet {
            config.output.quiet = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an env var. Unset is `Ok(None)`; unparseable is an error.
fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| ConfigError::InvalidValue {
            field: key.to_string(),
            message: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
