//! 4-digit multiplexed seven-segment display
//!
//! All four digits share one segment register. Each digit has its own
//! common-cathode select line, driven LOW to light that digit and HIGH to
//! turn it off. Only one select line is ever low.

use quadseg_core::digits::{DigitPosition, DIGIT_COUNT};
use quadseg_core::segment::{encode, BLANK};
use quadseg_core::traits::DigitDisplay;
use quadseg_hal::{OutputPin, SerialRegister};

/// Multiplexed display over a segment register and four select lines
pub struct MultiplexedDisplay<R, P> {
    register: R,
    /// Select lines, ones first
    digits: [P; DIGIT_COUNT],
    selected: Option<DigitPosition>,
}

impl<R, P> MultiplexedDisplay<R, P>
where
    R: SerialRegister,
    P: OutputPin,
{
    /// Create the driver with every digit off and the segments blank
    pub fn new(register: R, digits: [P; DIGIT_COUNT]) -> Self {
        let mut display = Self {
            register,
            digits,
            selected: None,
        };

        display.deselect_all();
        display.blank();

        display
    }

    /// Position currently selected
    pub fn selected(&self) -> Option<DigitPosition> {
        self.selected
    }

    /// Access the segment register
    pub fn register(&self) -> &R {
        &self.register
    }

    /// Give back the register and select lines
    pub fn release(self) -> (R, [P; DIGIT_COUNT]) {
        (self.register, self.digits)
    }

    fn deselect_all(&mut self) {
        for pin in self.digits.iter_mut() {
            pin.set_high();
        }
        self.selected = None;
    }
}

impl<R, P> DigitDisplay for MultiplexedDisplay<R, P>
where
    R: SerialRegister,
    P: OutputPin,
{
    fn blank(&mut self) {
        self.register.write_byte(BLANK);
    }

    fn select_digit(&mut self, position: DigitPosition) {
        self.deselect_all();
        self.blank();

        self.digits[position.index()].set_low();
        self.selected = Some(position);
    }

    fn show_digit(&mut self, digit: Option<u8>) {
        self.blank();

        if let Some(value) = digit {
            self.register.write_byte(encode(value));
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockRegister {
        writes: Vec<u8>,
    }

    impl SerialRegister for MockRegister {
        fn write_byte(&mut self, value: u8) {
            self.writes.push(value);
        }
    }

    /// Mock select line, starts selected (low) to prove `new` clears it
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn display() -> MultiplexedDisplay<MockRegister, MockPin> {
        let digits = [(); DIGIT_COUNT].map(|_| MockPin { high: false });
        MultiplexedDisplay::new(MockRegister::default(), digits)
    }

    fn lit(display: &MultiplexedDisplay<MockRegister, MockPin>) -> Vec<usize> {
        display
            .digits
            .iter()
            .enumerate()
            .filter(|(_, pin)| !pin.is_set_high())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_new_starts_dark() {
        let display = display();

        assert!(lit(&display).is_empty());
        assert_eq!(display.selected(), None);
        assert_eq!(display.register().writes, [BLANK]);
    }

    #[test]
    fn test_select_lights_one_digit() {
        let mut display = display();

        for pos in DigitPosition::ALL {
            display.select_digit(pos);
            assert_eq!(lit(&display), [pos.index()]);
            assert_eq!(display.selected(), Some(pos));
        }
    }

    #[test]
    fn test_select_blanks_segments() {
        let mut display = display();
        display.show_digit(Some(8));
        display.select_digit(DigitPosition::Tens);

        assert_eq!(display.register().writes.last(), Some(&BLANK));
    }

    #[test]
    fn test_show_digit_blanks_first() {
        let mut display = display();
        display.select_digit(DigitPosition::Ones);
        let before = display.register().writes.len();

        display.show_digit(Some(7));

        assert_eq!(&display.register().writes[before..], [BLANK, 0xE0]);
    }

    #[test]
    fn test_show_blank() {
        let mut display = display();
        display.select_digit(DigitPosition::Thousands);
        let before = display.register().writes.len();

        display.show_digit(None);

        assert_eq!(&display.register().writes[before..], [BLANK]);
    }

    #[test]
    fn test_release() {
        let mut display = display();
        display.select_digit(DigitPosition::Hundreds);

        let (register, digits) = display.release();
        assert!(!register.writes.is_empty());
        assert!(!digits[2].is_set_high());
        assert!(digits[0].is_set_high());
    }
}
