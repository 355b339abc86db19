//! Display multiplexing task
//!
//! Polls the scheduler in a tight loop, yielding to the executor between
//! polls. The loop never sleeps.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::gpio::Output;
use quadseg_core::config::TimingConfig;
use quadseg_core::scheduler::Scheduler;
use quadseg_drivers::{HalPin, MultiplexedDisplay, ShiftRegister};

use crate::clock::EmbassyClock;

/// Board output pin
pub type BoardPin = HalPin<Output<'static>>;

/// The display as wired on the board
pub type BoardDisplay = MultiplexedDisplay<ShiftRegister<BoardPin, BoardPin, BoardPin>, BoardPin>;

/// Display task - runs the refresh/count scheduler forever
#[embassy_executor::task]
pub async fn display_task(mut display: BoardDisplay, timing: TimingConfig) -> ! {
    info!(
        "Display task started (refresh {}us, count {}ms)",
        timing.refresh_interval_us, timing.count_interval_ms
    );

    let clock = EmbassyClock;
    let mut scheduler = Scheduler::new(timing);

    loop {
        let outcome = scheduler.poll_clock(&mut display, &clock);

        if outcome.counted {
            trace!("count -> {}", scheduler.value());
            if scheduler.value() == 0 {
                debug!("Counter wrapped");
            }
        }

        yield_now().await;
    }
}
