//! Move search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during a placement scan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Legality checks performed.
    pub probes: u64,

    /// Piece types whose placements were scanned.
    pub pieces_examined: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Legality checks per second.
    #[must_use]
    pub fn probes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.probes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
