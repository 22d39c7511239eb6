//! GPIO fan output
//!
//! On/off control for fans switched by a plain transistor without PWM.
//! Any positive level runs the fan at full speed.

use embedded_hal::digital::OutputPin;
use fanctl_core::config::FanOutputConfig;
use fanctl_core::traits::FanOutput;

/// GPIO fan output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioFan<P> {
    pin: P,
    /// If true, fan ON = pin LOW
    inverted: bool,
    /// Current logical state (true = fan on)
    on: bool,
    faulted: bool,
}

impl<P: OutputPin> GpioFan<P> {
    /// Create a new GPIO fan output
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut fan = Self {
            pin,
            inverted,
            on: false,
            faulted: false,
        };
        // Ensure fan starts off
        fan.set_level(0.0);
        fan
    }

    /// Create a GPIO fan as described by the output config
    pub fn from_config(pin: P, config: &FanOutputConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Check if the last pin write failed
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }
}

impl<P: OutputPin> FanOutput for GpioFan<P> {
    fn set_level(&mut self, level: f32) {
        self.on = level > 0.0;

        let result = if self.on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.faulted = result.is_err();
    }

    fn level(&self) -> f32 {
        if self.on {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_fan() {
        let mut fan = GpioFan::new(MockPin { high: true }, false);
        assert!(!fan.is_on());
        assert!(!fan.pin.high);

        fan.set_level(0.4);
        assert!(fan.is_on());
        assert_eq!(fan.level(), 1.0);
        assert!(fan.pin.high);

        fan.set_level(0.0);
        assert!(!fan.pin.high);
    }

    #[test]
    fn test_active_low_fan() {
        let config = FanOutputConfig::inverted(18);
        let mut fan = GpioFan::from_config(MockPin { high: false }, &config);
        assert!(fan.pin.high);

        fan.set_level(0.7);
        assert!(!fan.pin.high);
        assert!(!fan.is_faulted());
    }
}
