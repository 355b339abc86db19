//! Board configuration
//!
//! Generated by `build.rs` from `display.toml`: the [`DISPLAY_CONFIG`]
//! constant and the `display_pins!` macro that takes the configured GPIOs.

use quadseg_core::config::{DisplayConfig, DisplayPins, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/display_config.rs"));
