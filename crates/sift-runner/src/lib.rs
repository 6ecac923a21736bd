//! Sift runner: drives an analysis engine over a file list and turns the
//! result into one formatter call.
//!
//! The pieces, leaves first: memory watchdog, timestamp recorder over a
//! key/value cache, per-file run instrumentation, the inference observer,
//! the diagnostic partitioner, and the orchestrator that wires them into a
//! single blocking engine call.

pub mod cache;
pub mod engine;
pub mod formatter;
pub mod instrumentation;
pub mod observer;
pub mod orchestrator;
pub mod output;
pub mod partition;
pub mod timestamps;
pub mod watchdog;

pub use engine::{AnalysisEngine, AnalyzeRequest};
pub use formatter::Formatter;
pub use orchestrator::{RunOrchestrator, RunPhase};
