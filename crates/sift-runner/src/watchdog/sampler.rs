//! Process memory sampling.

use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Source of memory readings for the watchdog.
pub trait MemorySampler {
    /// Current (or peak) memory of this process in bytes, if available.
    fn peak_bytes(&mut self) -> Option<u64>;
}

/// Peak resident memory of the current process.
///
/// On Unix this is the kernel high-water mark from `getrusage`, so spikes
/// between samples are still counted. Elsewhere, or if that call fails,
/// the current RSS from `sysinfo` is used and the watchdog's running
/// maximum is the only peak tracking.
pub struct ProcessMemorySampler {
    system: System,
    pid: Option<Pid>,
}

impl ProcessMemorySampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = e, "cannot resolve current pid, memory sampling disabled");
                None
            }
        };
        Self {
            system: System::new(),
            pid,
        }
    }
}

impl Default for ProcessMemorySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMemorySampler {
    fn current_bytes(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.system.process(pid).map(|p| p.memory())
    }
}

impl MemorySampler for ProcessMemorySampler {
    fn peak_bytes(&mut self) -> Option<u64> {
        let current = self.current_bytes();
        match (high_water_mark_bytes(), current) {
            (Some(peak), Some(now)) => Some(peak.max(now)),
            (peak, now) => peak.or(now),
        }
    }
}

/// `ru_maxrss` of this process in bytes.
#[cfg(unix)]
pub fn high_water_mark_bytes() -> Option<u64> {
    // SAFETY: `rusage` is plain data and getrusage only writes into it.
    let usage = unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return None;
        }
        usage
    };
    let max_rss = u64::try_from(usage.ru_maxrss).ok()?;
    // Kilobytes everywhere except Apple platforms, which report bytes.
    if cfg!(target_vendor = "apple") {
        Some(max_rss)
    } else {
        Some(max_rss.saturating_mul(1024))
    }
}

#[cfg(not(unix))]
pub fn high_water_mark_bytes() -> Option<u64> {
    None
}
