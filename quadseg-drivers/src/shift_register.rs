//! 74HC595 serial-in shift register
//!
//! Bit-banged over three output lines:
//!
//! - DS (serial data): bit value, sampled on the shift clock rising edge
//! - SH_CP (shift clock): one pulse per bit
//! - ST_CP (storage clock / latch): rising edge copies the shifted byte to
//!   the Q0-Q7 outputs
//!
//! Every write is latch LOW, eight bits least-significant first, latch HIGH.
//! With the display wiring, bit 0 (decimal point) goes in first and bit 7
//! (segment A) last, ending up on Q7.

use quadseg_hal::{shift_out, BitOrder, OutputPin, SerialRegister};

/// Bit-banged 74HC595
pub struct ShiftRegister<D, C, L> {
    data: D,
    clock: C,
    latch: L,
    /// Last byte latched to the outputs
    latched: u8,
}

impl<D, C, L> ShiftRegister<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Bit order used on the wire
    pub const BIT_ORDER: BitOrder = BitOrder::LsbFirst;

    /// Create the driver and clear the outputs
    pub fn new(data: D, clock: C, latch: L) -> Self {
        let mut register = Self {
            data,
            clock,
            latch,
            latched: 0,
        };

        register.data.set_low();
        register.clock.set_low();
        register.latch.set_low();
        register.write_byte(0);

        register
    }

    /// Byte currently on the register outputs
    pub fn latched(&self) -> u8 {
        self.latched
    }

    /// Give back the pins
    pub fn release(self) -> (D, C, L) {
        (self.data, self.clock, self.latch)
    }
}

impl<D, C, L> SerialRegister for ShiftRegister<D, C, L>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    fn write_byte(&mut self, value: u8) {
        self.latch.set_low();
        shift_out(&mut self.data, &mut self.clock, Self::BIT_ORDER, value);
        self.latch.set_high();

        self.latched = value;
    }
}
