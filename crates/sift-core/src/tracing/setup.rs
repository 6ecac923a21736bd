//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Sift tracing/logging system.
///
/// Reads `SIFT_LOG` for per-module log levels, e.g.
/// `SIFT_LOG=sift_runner::watchdog=debug,sift_core=warn`.
/// Falls back to `sift=info` if `SIFT_LOG` is not set or is invalid.
///
/// Logs go to stderr so formatter output on stdout stays parseable.
/// Calling this more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("sift=info"));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // Another global subscriber already owns the process; ours is dropped.
        if let Err(e) = installed {
            eprintln!("sift: tracing subscriber not installed: {e}");
        }
    });
}
