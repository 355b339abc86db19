//! Configuration types
//!
//! Timing and pin assignment for the display. The firmware reads these from
//! `display.toml` at build time; everything else uses [`DisplayConfig::DEFAULT`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::digits::DIGIT_COUNT;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Scheduler timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Time a digit stays selected before the next one (microseconds)
    pub refresh_interval_us: u32,
    /// Time between counter increments (milliseconds)
    pub count_interval_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        refresh_interval_us: 10,
        count_interval_ms: 500,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// GPIO assignment for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// Digit select lines (active-low), ones first
    pub digits: [u8; DIGIT_COUNT],
    /// Register serial data (DS)
    pub data: u8,
    /// Register storage clock (ST_CP)
    pub latch: u8,
    /// Register shift clock (SH_CP)
    pub clock: u8,
}

impl DisplayPins {
    pub const DEFAULT: Self = Self {
        digits: [4, 5, 6, 7],
        data: 8,
        latch: 9,
        clock: 10,
    };

    /// All seven pins, digit lines first
    pub fn all(&self) -> [u8; DIGIT_COUNT + 3] {
        let [d0, d1, d2, d3] = self.digits;
        [d0, d1, d2, d3, self.data, self.latch, self.clock]
    }
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: TimingConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pins: DisplayPins,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An interval is zero
    ZeroInterval,
    /// Refresh interval is not shorter than the count interval
    RefreshSlowerThanCount,
    /// Pin number outside the GPIO range
    InvalidPin(u8),
    /// Pin assigned to more than one line
    DuplicatePin(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroInterval => write!(f, "intervals must be greater than zero"),
            ConfigError::RefreshSlowerThanCount => {
                write!(f, "refresh interval must be shorter than count interval")
            }
            ConfigError::InvalidPin(pin) => {
                write!(f, "gpio{} is out of range (0-{})", pin, GPIO_COUNT - 1)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "gpio{} is assigned twice", pin),
        }
    }
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        timing: TimingConfig::DEFAULT,
        pins: DisplayPins::DEFAULT,
    };

    /// Check timing and pin assignment
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        if timing.refresh_interval_us == 0 || timing.count_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let count_us = u64::from(timing.count_interval_ms) * 1000;
        if u64::from(timing.refresh_interval_us) >= count_us {
            return Err(ConfigError::RefreshSlowerThanCount);
        }

        let pins = self.pins.all();
        for (i, &pin) in pins.iter().enumerate() {
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin));
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin(pin));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DisplayConfig::default();
        assert_eq!(config, DisplayConfig::DEFAULT);
        assert_eq!(config.timing.refresh_interval_us, 10);
        assert_eq!(config.timing.count_interval_ms, 500);
        assert_eq!(config.pins.digits, [4, 5, 6, 7]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_interval() {
        let mut config = DisplayConfig::DEFAULT;
        config.timing.count_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let mut config = DisplayConfig::DEFAULT;
        config.timing.refresh_interval_us = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_refresh_slower_than_count() {
        let mut config = DisplayConfig::DEFAULT;
        config.timing.refresh_interval_us = 500_000;
        assert_eq!(config.validate(), Err(ConfigError::RefreshSlowerThanCount));

        config.timing.refresh_interval_us = 499_999;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_pin() {
        let mut config = DisplayConfig::DEFAULT;
        config.pins.clock = 30;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPin(30)));
    }

    #[test]
    fn test_duplicate_pin() {
        let mut config = DisplayConfig::DEFAULT;
        config.pins.latch = 5;
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(5)));

        let mut config = DisplayConfig::DEFAULT;
        config.pins.digits = [4, 4, 6, 7];
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePin(4)));
    }
}
