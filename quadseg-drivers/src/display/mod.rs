//! Seven-segment display drivers

pub mod multiplexed;

pub use multiplexed::MultiplexedDisplay;
