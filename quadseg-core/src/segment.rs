//! Seven-segment encoding
//!
//! Segment layout and bit assignment (bit 7 = A ... bit 0 = decimal point):
//!
//! ```text
//!    ___
//! F | A | B
//!   |___|
//! E | G | C
//!   |___|  .
//!     D    Dp
//! ```
//!
//! The table below is a wiring contract with the register outputs and must
//! not be reordered.

/// Segment bit masks, A in the most significant bit
pub struct Segment;

impl Segment {
    pub const A: u8 = 0b1000_0000;
    pub const B: u8 = 0b0100_0000;
    pub const C: u8 = 0b0010_0000;
    pub const D: u8 = 0b0001_0000;
    pub const E: u8 = 0b0000_1000;
    pub const F: u8 = 0b0000_0100;
    pub const G: u8 = 0b0000_0010;
    /// Decimal point
    pub const DP: u8 = 0b0000_0001;
}

/// All segments off
pub const BLANK: u8 = 0x00;

/// Segment pattern for each decimal digit, indexed by digit value
pub const SEGMENT_TABLE: [u8; 10] = [
    0b1111_1100, // 0
    0b0110_0000, // 1
    0b1101_1010, // 2
    0b1111_0010, // 3
    0b0110_0110, // 4
    0b1011_0110, // 5
    0b1011_1110, // 6
    0b1110_0000, // 7
    0b1111_1110, // 8
    0b1110_0110, // 9
];

/// Encode a decimal digit (0-9) as a segment bitmask
///
/// The caller guarantees `digit <= 9`.
#[inline]
pub fn encode(digit: u8) -> u8 {
    debug_assert!(digit <= 9, "digit out of range");
    SEGMENT_TABLE[digit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_literals() {
        let expected = [0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xE6];
        for (digit, mask) in expected.iter().enumerate() {
            assert_eq!(encode(digit as u8), *mask, "digit {}", digit);
        }
    }

    #[test]
    fn test_table_matches_segments() {
        use Segment as S;

        assert_eq!(encode(0), S::A | S::B | S::C | S::D | S::E | S::F);
        assert_eq!(encode(1), S::B | S::C);
        assert_eq!(encode(2), S::A | S::B | S::D | S::E | S::G);
        assert_eq!(encode(3), S::A | S::B | S::C | S::D | S::G);
        assert_eq!(encode(4), S::B | S::C | S::F | S::G);
        assert_eq!(encode(5), S::A | S::C | S::D | S::F | S::G);
        assert_eq!(encode(6), S::A | S::C | S::D | S::E | S::F | S::G);
        assert_eq!(encode(7), S::A | S::B | S::C);
        assert_eq!(encode(8), S::A | S::B | S::C | S::D | S::E | S::F | S::G);
        assert_eq!(encode(9), S::A | S::B | S::C | S::F | S::G);
    }

    #[test]
    fn test_decimal_point_never_lit() {
        assert!(SEGMENT_TABLE.iter().all(|mask| mask & Segment::DP == 0));
        assert_eq!(BLANK, 0);
    }
}
