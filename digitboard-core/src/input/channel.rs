//! Per-button shared state
//!
//! A `ButtonChannel` is written by exactly one producer (the interrupt
//! context of its own button line) and drained by exactly one consumer
//! (the polling loop). Each field is an independent atomic, so neither
//! side ever observes a torn value and neither side takes a lock.
//!
//! # Memory ordering
//!
//! The producer stores `indicator` and `last_trigger_us` before it sets
//! `pending` with `Release`. The consumer clears `pending` with an
//! `Acquire` swap, so the indicator it reads afterwards is at least as new
//! as the edge that raised the flag.

use portable_atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared state for one physical button
#[derive(Debug)]
pub struct ButtonChannel {
    /// Current indicator LED level
    indicator: AtomicBool,
    /// Timestamp of the last accepted edge (µs)
    last_trigger_us: AtomicU64,
    /// Accepted edge not yet observed by the polling loop
    pending: AtomicBool,
}

impl Default for ButtonChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonChannel {
    /// Startup state: indicator off, timestamp 0, nothing pending
    pub const fn new() -> Self {
        Self {
            indicator: AtomicBool::new(false),
            last_trigger_us: AtomicU64::new(0),
            pending: AtomicBool::new(false),
        }
    }

    /// Handle a falling edge observed at `now_us`
    ///
    /// Returns `None` when the edge lands within `window_us` of the last
    /// accepted edge (inclusive) or when the clock appears to run
    /// backwards. Otherwise flips the indicator, records the timestamp,
    /// latches `pending` and returns the new indicator level.
    ///
    /// Producer side only: must not be called from two contexts at once.
    pub fn on_edge(&self, now_us: u64, window_us: u64) -> Option<bool> {
        let last = self.last_trigger_us.load(Ordering::Relaxed);
        if now_us < last || now_us - last <= window_us {
            return None;
        }

        let level = !self.indicator.load(Ordering::Relaxed);
        self.indicator.store(level, Ordering::Relaxed);
        self.last_trigger_us.store(now_us, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        Some(level)
    }

    /// Clear the pending flag, returning the indicator level if it was set
    ///
    /// Consumer side only.
    pub fn take_pending(&self) -> Option<bool> {
        if self.pending.swap(false, Ordering::Acquire) {
            Some(self.indicator.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    /// Current indicator level
    pub fn indicator(&self) -> bool {
        self.indicator.load(Ordering::Acquire)
    }

    /// Whether an accepted edge is waiting to be drained
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Timestamp of the last accepted edge (µs)
    pub fn last_trigger_us(&self) -> u64 {
        self.last_trigger_us.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 300_000;

    #[test]
    fn test_initial_state() {
        let ch = ButtonChannel::new();
        assert!(!ch.indicator());
        assert!(!ch.is_pending());
        assert_eq!(ch.last_trigger_us(), 0);
        assert_eq!(ch.take_pending(), None);
    }

    #[test]
    fn test_first_edge_after_window_is_accepted() {
        let ch = ButtonChannel::new();
        assert_eq!(ch.on_edge(1_000_000, WINDOW), Some(true));
        assert!(ch.indicator());
        assert!(ch.is_pending());
        assert_eq!(ch.last_trigger_us(), 1_000_000);
    }

    #[test]
    fn test_edge_during_boot_window_is_suppressed() {
        // Timestamp starts at 0, so the first window after boot is dead
        let ch = ButtonChannel::new();
        assert_eq!(ch.on_edge(WINDOW, WINDOW), None);
        assert_eq!(ch.on_edge(WINDOW + 1, WINDOW), Some(true));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let ch = ButtonChannel::new();
        ch.on_edge(1_000_000, WINDOW);
        assert_eq!(ch.on_edge(1_000_000 + WINDOW, WINDOW), None);
        assert_eq!(ch.on_edge(1_000_000 + WINDOW + 1, WINDOW), Some(false));
    }

    #[test]
    fn test_suppressed_edge_leaves_state_untouched() {
        let ch = ButtonChannel::new();
        ch.on_edge(1_000_000, WINDOW);
        ch.take_pending();
        assert_eq!(ch.on_edge(1_100_000, WINDOW), None);
        assert!(ch.indicator());
        assert!(!ch.is_pending());
        assert_eq!(ch.last_trigger_us(), 1_000_000);
    }

    #[test]
    fn test_backwards_clock_is_suppressed() {
        let ch = ButtonChannel::new();
        ch.on_edge(5_000_000, WINDOW);
        assert_eq!(ch.on_edge(1_000_000, WINDOW), None);
        assert_eq!(ch.last_trigger_us(), 5_000_000);
    }

    #[test]
    fn test_take_pending_is_one_shot() {
        let ch = ButtonChannel::new();
        ch.on_edge(1_000_000, WINDOW);
        assert_eq!(ch.take_pending(), Some(true));
        assert_eq!(ch.take_pending(), None);
        assert!(ch.indicator());
    }

    #[test]
    fn test_undrained_edges_merge_into_one_pending() {
        let ch = ButtonChannel::new();
        ch.on_edge(1_000_000, WINDOW);
        ch.on_edge(2_000_000, WINDOW);
        // Two flips, one latched event reporting the latest level
        assert_eq!(ch.take_pending(), Some(false));
        assert_eq!(ch.take_pending(), None);
    }
}
