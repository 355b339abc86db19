//! Monotonic time readings
//!
//! The display loop reads two clocks of different resolution. Both are
//! free-running `u32` counters that wrap; consumers compare them with
//! wrapping subtraction.

/// Free-running time source
pub trait MonotonicClock {
    /// Fine-grained reading in microseconds
    fn now_micros(&self) -> u32;

    /// Coarse reading in milliseconds
    fn now_millis(&self) -> u32;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_micros(&self) -> u32 {
        (**self).now_micros()
    }

    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}
