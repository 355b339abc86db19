//! Board-agnostic core logic for the 4-digit display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment encoding (digit to segment bitmask)
//! - Number splitting into positional digits
//! - Display driver trait
//! - Non-blocking refresh/count scheduler
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod digits;
pub mod scheduler;
pub mod segment;
pub mod traits;
