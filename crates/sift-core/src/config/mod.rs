//! Configuration system for Sift.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod output_config;
pub mod run_config;
pub mod sift_config;

pub use output_config::OutputConfig;
pub use run_config::{AnalysisScope, RunConfig, RunMode, Strictness};
pub use sift_config::{CliOverrides, LoadedConfig, SiftConfig};
