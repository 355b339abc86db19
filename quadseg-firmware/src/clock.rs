//! Embassy time source

use embassy_time::Instant;
use quadseg_hal::MonotonicClock;

/// Reads the embassy time driver
///
/// Both readings truncate to `u32` and wrap; the scheduler compares them
/// with wrapping subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_micros(&self) -> u32 {
        Instant::now().as_micros() as u32
    }

    fn now_millis(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
