//! Display scheduler
//!
//! Runs two periodic tasks from one non-blocking poll:
//!
//! - **Refresh**: selects the next digit position and shows its digit
//! - **Count**: increments the displayed value, wrapping 9999 to 0
//!
//! The two tasks read separate clocks (microseconds for refresh,
//! milliseconds for counting) and fire independently. Refresh is always
//! evaluated before count within one poll.

use quadseg_hal::MonotonicClock;

use super::timer::IntervalTimer;
use crate::config::TimingConfig;
use crate::digits::{split, DigitPosition, MAX_VALUE};
use crate::traits::DigitDisplay;

/// What fired during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Position refreshed, if the refresh task fired
    pub refreshed: Option<DigitPosition>,
    /// Counter incremented
    pub counted: bool,
}

impl PollOutcome {
    /// Nothing fired
    pub fn is_idle(&self) -> bool {
        self.refreshed.is_none() && !self.counted
    }
}

/// Refresh/count scheduler
///
/// Owns all mutable display state. Call [`Scheduler::poll`] (or
/// [`Scheduler::poll_clock`]) from the host loop as often as possible; it
/// never blocks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scheduler {
    refresh: IntervalTimer,
    count: IntervalTimer,
    /// Position shown by the next refresh
    cursor: DigitPosition,
    /// Value being displayed (0-9999)
    value: u16,
}

impl Scheduler {
    /// Create a scheduler at time 0, showing 0, scanning from the ones digit
    pub const fn new(timing: TimingConfig) -> Self {
        Self {
            refresh: IntervalTimer::new(timing.refresh_interval_us),
            count: IntervalTimer::new(timing.count_interval_ms),
            cursor: DigitPosition::Ones,
            value: 0,
        }
    }

    /// Current counter value
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Position the next refresh will show
    pub fn next_position(&self) -> DigitPosition {
        self.cursor
    }

    /// Run one scheduler iteration against explicit clock readings
    ///
    /// `refresh_now` is in refresh-clock ticks (microseconds) and
    /// `count_now` in count-clock ticks (milliseconds).
    pub fn poll<D: DigitDisplay>(
        &mut self,
        display: &mut D,
        refresh_now: u32,
        count_now: u32,
    ) -> PollOutcome {
        let mut outcome = PollOutcome::default();

        display.blank();

        if self.refresh.poll(refresh_now) {
            outcome.refreshed = Some(self.refresh_digit(display));
        }

        if self.count.poll(count_now) {
            self.increment();
            outcome.counted = true;
        }

        outcome
    }

    /// Run one scheduler iteration, reading both clocks from `clock`
    pub fn poll_clock<D, C>(&mut self, display: &mut D, clock: &C) -> PollOutcome
    where
        D: DigitDisplay,
        C: MonotonicClock,
    {
        let refresh_now = clock.now_micros();
        let count_now = clock.now_millis();
        self.poll(display, refresh_now, count_now)
    }

    fn refresh_digit<D: DigitDisplay>(&mut self, display: &mut D) -> DigitPosition {
        let position = self.cursor;
        let buffer = split(self.value);

        display.select_digit(position);
        display.show_digit(buffer.digit(position));

        self.cursor = position.next();
        position
    }

    fn increment(&mut self) {
        self.value = if self.value >= MAX_VALUE {
            0
        } else {
            self.value + 1
        };
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(TimingConfig::DEFAULT)
    }
}
