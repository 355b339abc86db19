//! Serial-in shift register abstractions
//!
//! A serial-in, parallel-out register (74HC595 and friends) is fed one bit
//! at a time on a data line, clocked in on a rising clock edge, and committed
//! to its outputs by the latch line.

use crate::gpio::{Level, OutputPin};

/// Order in which the bits of a byte are clocked out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 0 first, bit 7 last
    LsbFirst,
    /// Bit 7 first, bit 0 last
    MsbFirst,
}

/// A register that accepts whole-byte writes
///
/// Each call must commit exactly one byte to the register outputs.
pub trait SerialRegister {
    /// Write one byte and latch it to the outputs
    fn write_byte(&mut self, value: u8);
}

impl<R: SerialRegister + ?Sized> SerialRegister for &mut R {
    fn write_byte(&mut self, value: u8) {
        (**self).write_byte(value);
    }
}

/// Clock a byte out on `data`/`clock`, one bit per rising clock edge
///
/// The clock line is left low. Latching is up to the caller.
pub fn shift_out<D, C>(data: &mut D, clock: &mut C, order: BitOrder, value: u8)
where
    D: OutputPin + ?Sized,
    C: OutputPin + ?Sized,
{
    for i in 0..8 {
        let bit = match order {
            BitOrder::LsbFirst => (value >> i) & 1,
            BitOrder::MsbFirst => (value >> (7 - i)) & 1,
        };

        data.set_level(Level::from(bit == 1));
        clock.set_high();
        clock.set_low();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::cell::RefCell;
    use std::vec::Vec;

    /// Records the data level at each rising clock edge
    struct Wire {
        data: bool,
        sampled: Vec<bool>,
    }

    struct DataPin<'a>(&'a RefCell<Wire>);
    struct ClockPin<'a>(&'a RefCell<Wire>, bool);

    impl OutputPin for DataPin<'_> {
        fn set_high(&mut self) {
            self.0.borrow_mut().data = true;
        }

        fn set_low(&mut self) {
            self.0.borrow_mut().data = false;
        }

        fn is_set_high(&self) -> bool {
            self.0.borrow().data
        }
    }

    impl OutputPin for ClockPin<'_> {
        fn set_high(&mut self) {
            if !self.1 {
                let mut wire = self.0.borrow_mut();
                let bit = wire.data;
                wire.sampled.push(bit);
            }
            self.1 = true;
        }

        fn set_low(&mut self) {
            self.1 = false;
        }

        fn is_set_high(&self) -> bool {
            self.1
        }
    }

    fn clock_out(order: BitOrder, value: u8) -> (Vec<bool>, bool) {
        let wire = RefCell::new(Wire {
            data: false,
            sampled: Vec::new(),
        });
        let mut data = DataPin(&wire);
        let mut clock = ClockPin(&wire, false);

        shift_out(&mut data, &mut clock, order, value);

        let idle_high = clock.is_set_high();
        (wire.into_inner().sampled, idle_high)
    }

    #[test]
    fn test_lsb_first() {
        let (bits, clock_high) = clock_out(BitOrder::LsbFirst, 0b1110_0000);
        assert_eq!(
            bits,
            [false, false, false, false, false, true, true, true]
        );
        assert!(!clock_high);
    }

    #[test]
    fn test_msb_first() {
        let (bits, _) = clock_out(BitOrder::MsbFirst, 0b1110_0000);
        assert_eq!(
            bits,
            [true, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_eight_edges_per_byte() {
        assert_eq!(clock_out(BitOrder::LsbFirst, 0x00).0.len(), 8);
        assert_eq!(clock_out(BitOrder::LsbFirst, 0xFF).0, [true; 8]);
    }
}
