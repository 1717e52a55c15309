//! Resident memory of the current process.

use sysinfo::{Pid, ProcessesToUpdate, System};

/// Bytes in one reported megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Samples the resident set size of this process.
///
/// Solver children are separate processes and are not included.
pub struct MemoryProbe {
    system: System,
    pid: Pid,
}

impl MemoryProbe {
    /// Returns `None` on platforms where the current pid is unavailable.
    pub fn current() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(Self {
            system: System::new(),
            pid,
        })
    }

    /// Current resident memory in bytes, or `None` if the process could not
    /// be read.
    pub fn resident_bytes(&mut self) -> Option<u64> {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.system.process(self.pid).map(|process| process.memory())
    }
}

impl std::fmt::Debug for MemoryProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryProbe").field("pid", &self.pid).finish()
    }
}
