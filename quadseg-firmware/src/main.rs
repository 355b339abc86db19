//! Quadseg - 4-digit seven-segment counter firmware
//!
//! Counts from 0 to 9999 on a multiplexed 4-digit display. Segments are fed
//! through a 74HC595 shift register; each digit has an active-low select
//! line. Pin assignment and timing come from `display.toml`.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use quadseg_drivers::{HalPin, MultiplexedDisplay, ShiftRegister};

#[macro_use]
mod pins;
#[macro_use]
mod config;
mod clock;
mod tasks;

use crate::config::DISPLAY_CONFIG;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quadseg firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let pins = &DISPLAY_CONFIG.pins;
    info!(
        "Pins: digits={}, data=gpio{}, latch=gpio{}, clock=gpio{}",
        pins.digits, pins.data, pins.latch, pins.clock
    );

    let (digit_pins, data_pin, clock_pin, latch_pin) = display_pins!(p);

    // Digit lines start deselected (high), register lines low
    let digits = digit_pins.map(|pin| HalPin::new(Output::new(pin, Level::High), true));
    let data = HalPin::new(Output::new(data_pin, Level::Low), false);
    let clock = HalPin::new(Output::new(clock_pin, Level::Low), false);
    let latch = HalPin::new(Output::new(latch_pin, Level::Low), false);

    let register = ShiftRegister::new(data, clock, latch);
    let display = MultiplexedDisplay::new(register, digits);
    info!("Display initialized");

    spawner
        .spawn(tasks::display_task(display, DISPLAY_CONFIG.timing))
        .unwrap();

    info!("Display task spawned, firmware running");

    // All work happens in the display task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
