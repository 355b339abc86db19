//! Quadseg Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the display
//! logic needs. Chip-specific code (the RP2040 firmware, or mocks in tests)
//! implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  quadseg-firmware / host tests          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quadseg-core  (scheduler, encoding)    │
//! │  quadseg-drivers (74HC595, multiplexer) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quadseg-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital write
//! - [`shift::SerialRegister`] - One-byte writes to a serial-in register
//! - [`time::MonotonicClock`] - Free-running fine and coarse time readings

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod shift;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{Level, OutputPin};
pub use shift::{shift_out, BitOrder, SerialRegister};
pub use time::MonotonicClock;
