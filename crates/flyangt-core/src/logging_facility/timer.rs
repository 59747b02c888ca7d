//! Monotonic timer feeding the `duration_ms` log field

use std::time::Instant;

/// Measures the wall time of one operation
#[derive(Debug, Clone, Copy)]
pub struct OpTimer {
    started: Instant,
}

impl OpTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since `start`, saturating at `u64::MAX`
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for OpTimer {
    fn default() -> Self {
        Self::start()
    }
}
