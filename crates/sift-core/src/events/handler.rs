//! SiftEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a run.
///
/// All methods have no-op default implementations, so handlers only
/// override the events they care about.
pub trait SiftEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_ceiling_recorded(&self, _event: &CeilingRecordedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
