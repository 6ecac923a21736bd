//! Tests for tracing initialization.

use std::sync::Mutex;

use sift_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_with_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SIFT_LOG", "sift_runner=debug,sift_core=warn");
    init_tracing();
    std::env::remove_var("SIFT_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SIFT_LOG", "[[not a filter");
    init_tracing();
    std::env::remove_var("SIFT_LOG");
}
