//! Tests for the run event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sift_core::config::RunMode;
use sift_core::events::dispatcher::EventDispatcher;
use sift_core::events::handler::SiftEventHandler;
use sift_core::events::types::*;

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    complete: AtomicUsize,
    errors: AtomicUsize,
}

impl SiftEventHandler for CountingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_complete(&self, _event: &RunCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }

    fn on_error(&self, _event: &ErrorEvent) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl SiftEventHandler for PanickingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        panic!("handler bug");
    }
}

fn started() -> RunStartedEvent {
    RunStartedEvent {
        file_count: 2,
        mode: RunMode::Interactive,
        incremental: false,
    }
}

#[test]
fn test_noop_defaults() {
    struct NoopHandler;
    impl SiftEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_run_started(&started());
    handler.on_ceiling_recorded(&CeilingRecordedEvent {
        path: "/tmp/ceiling".into(),
        peak_mb: 12,
    });
}

#[test]
fn test_empty_dispatcher() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_run_started(&started());
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_run_started(&started());
    dispatcher.emit_error(&ErrorEvent {
        message: "boom".into(),
        error_code: "ENGINE_ERROR".into(),
    });

    for h in [&a, &b] {
        assert_eq!(h.started.load(Ordering::Relaxed), 1);
        assert_eq!(h.errors.load(Ordering::Relaxed), 1);
        assert_eq!(h.complete.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_run_started(&started());

    assert_eq!(counter.started.load(Ordering::Relaxed), 1);
}
