//! GPIO output abstraction
//!
//! The display only ever writes pins, so there is no input side here.

/// Logic level on a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output pin
///
/// Writes are infallible: a pin that can fail has to be adapted before it
/// reaches the display code.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to the given level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_set_level() {
        let mut pin = MockPin { high: false };

        pin.set_level(Level::High);
        assert!(pin.is_set_high());

        pin.set_level(Level::Low);
        assert!(!pin.is_set_high());
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive_high<P: OutputPin>(mut pin: P) -> bool {
            pin.set_high();
            pin.is_set_high()
        }

        let mut pin = MockPin { high: false };
        assert!(drive_high(&mut pin));
        assert!(pin.high);
    }
}
