//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the display traits:
//!
//! - 74HC595 serial-in shift register, bit-banged over three GPIO lines
//! - 4-position multiplexed seven-segment display
//! - Adapter from `embedded-hal` output pins to the Quadseg pin trait

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod pin;
pub mod shift_register;

pub use display::MultiplexedDisplay;
pub use pin::HalPin;
pub use shift_register::ShiftRegister;
