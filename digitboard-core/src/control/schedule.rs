//! Tick cadence

use crate::config::Timing;

/// Fixed pause between polling loop ticks
///
/// The only tunable in the loop: shorter is more responsive, longer
/// draws less power. Neither affects correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSchedule {
    interval_ms: u64,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TickSchedule {
    pub const DEFAULT: Self = Self::from_timing(&Timing::DEFAULT);

    /// Zero is raised to 1 ms so the loop always yields
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
        }
    }

    pub const fn from_timing(timing: &Timing) -> Self {
        Self::new(timing.tick_interval_ms)
    }

    /// Pause after each tick (ms)
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Ticks completed after `elapsed_ms` of free running
    pub const fn ticks_in(&self, elapsed_ms: u64) -> u64 {
        elapsed_ms / self.interval_ms
    }
}
