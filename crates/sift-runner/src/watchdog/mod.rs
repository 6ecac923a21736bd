//! Memory watchdog: a ceiling file an external monitor can poll, and the
//! scoped cleanup that removes it when a run ends for any reason other
//! than memory exhaustion.

pub mod ceiling;
pub mod guard;
pub mod sampler;

pub use ceiling::{bytes_to_mb, format_ceiling, read_ceiling, MemoryWatchdog};
pub use guard::{is_out_of_memory_message, panic_message, CeilingGuard};
pub use sampler::{high_water_mark_bytes, MemorySampler, ProcessMemorySampler};
