//! Digit positions and number splitting
//!
//! A displayed value is held as four positional digits, ones first.
//! Positions above the most significant digit are blank rather than zero,
//! so 42 shows as `  42` and not `0042`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Largest value the display can show
pub const MAX_VALUE: u16 = 9999;

/// Physical digit position, least significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitPosition {
    #[default]
    Ones,
    Tens,
    Hundreds,
    Thousands,
}

impl DigitPosition {
    /// All positions in scan order
    pub const ALL: [DigitPosition; DIGIT_COUNT] = [
        DigitPosition::Ones,
        DigitPosition::Tens,
        DigitPosition::Hundreds,
        DigitPosition::Thousands,
    ];

    /// Index of this position (0 = ones ... 3 = thousands)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position for an index, if in range
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(DigitPosition::Ones),
            1 => Some(DigitPosition::Tens),
            2 => Some(DigitPosition::Hundreds),
            3 => Some(DigitPosition::Thousands),
            _ => None,
        }
    }

    /// Next position in scan order, wrapping thousands back to ones
    pub const fn next(self) -> Self {
        match self {
            DigitPosition::Ones => DigitPosition::Tens,
            DigitPosition::Tens => DigitPosition::Hundreds,
            DigitPosition::Hundreds => DigitPosition::Thousands,
            DigitPosition::Thousands => DigitPosition::Ones,
        }
    }

    /// Place value of this position (1, 10, 100, 1000)
    pub const fn weight(self) -> u16 {
        match self {
            DigitPosition::Ones => 1,
            DigitPosition::Tens => 10,
            DigitPosition::Hundreds => 100,
            DigitPosition::Thousands => 1000,
        }
    }
}

/// Four positional digits, `None` meaning blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    digits: [Option<u8>; DIGIT_COUNT],
}

impl DisplayBuffer {
    /// All positions blank
    pub const fn blank() -> Self {
        Self {
            digits: [None; DIGIT_COUNT],
        }
    }

    /// Digit shown at a position (`None` = blank)
    pub fn digit(&self, position: DigitPosition) -> Option<u8> {
        self.digits[position.index()]
    }

    /// Digits ordered ones first
    pub fn as_array(&self) -> &[Option<u8>; DIGIT_COUNT] {
        &self.digits
    }

    /// Recombine the non-blank digits into a number
    pub fn value(&self) -> u16 {
        DigitPosition::ALL
            .iter()
            .filter_map(|&pos| self.digit(pos).map(|d| d as u16 * pos.weight()))
            .sum()
    }
}

/// Split a value (0-9999) into positional digits
///
/// Every position up to the most significant digit is filled; the rest stay
/// blank. Zero still shows a single `0` in the ones position.
pub fn split(n: u16) -> DisplayBuffer {
    debug_assert!(n <= MAX_VALUE, "value exceeds display width");

    let mut buffer = DisplayBuffer::blank();
    let mut rest = n;

    for pos in DigitPosition::ALL {
        buffer.digits[pos.index()] = Some((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    buffer
}
