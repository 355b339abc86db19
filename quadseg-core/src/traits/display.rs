//! Multiplexed digit display trait

use crate::digits::DigitPosition;

/// A multiplexed display with one shared segment register
///
/// Only one digit position is lit at a time. Implementations must keep the
/// segment register blank while the selected position changes so the old
/// pattern never shows on the new digit.
pub trait DigitDisplay {
    /// Turn every segment off on the selected position
    fn blank(&mut self);

    /// Deselect all positions, blank, then select `position` alone
    fn select_digit(&mut self, position: DigitPosition);

    /// Show a digit (0-9) on the selected position, or blank for `None`
    fn show_digit(&mut self, digit: Option<u8>);
}

impl<D: DigitDisplay + ?Sized> DigitDisplay for &mut D {
    fn blank(&mut self) {
        (**self).blank();
    }

    fn select_digit(&mut self, position: DigitPosition) {
        (**self).select_digit(position);
    }

    fn show_digit(&mut self, digit: Option<u8>) {
        (**self).show_digit(digit);
    }
}
