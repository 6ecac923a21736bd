//! Sift core: shared types, errors, configuration, run events, and tracing
//! setup used by the run orchestrator.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
