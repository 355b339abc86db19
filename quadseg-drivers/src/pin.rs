//! `embedded-hal` pin adapter
//!
//! Wraps any `embedded_hal::digital::OutputPin` that cannot fail (such as
//! `embassy_rp::gpio::Output`) so it can be handed to the display drivers.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use quadseg_hal::OutputPin;

/// Infallible `embedded-hal` output pin with a tracked level
pub struct HalPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> HalPin<P> {
    /// Wrap a pin, driving it to `high` so the tracked level is accurate
    pub fn new(pin: P, high: bool) -> Self {
        let mut wrapped = Self { pin, high };
        if high {
            wrapped.set_high();
        } else {
            wrapped.set_low();
        }
        wrapped
    }

    /// Give back the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for HalPin<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
