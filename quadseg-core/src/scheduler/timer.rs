//! Non-blocking interval timer

/// Periodic timer polled against a free-running `u32` clock
///
/// Fires when strictly more than `interval` ticks have passed since the last
/// firing. A reading exactly `interval` after the last firing does not fire;
/// the next one does. Clock wraparound is handled by wrapping subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer {
    interval: u32,
    last: u32,
}

impl IntervalTimer {
    /// Create a timer whose last firing is at time 0
    pub const fn new(interval: u32) -> Self {
        Self { interval, last: 0 }
    }

    /// Check the timer against `now`, recording `now` if it fires
    pub fn poll(&mut self, now: u32) -> bool {
        if now.wrapping_sub(self.last) > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time of the last firing
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Ticks that must strictly pass between firings
    pub fn interval(&self) -> u32 {
        self.interval
    }
}
