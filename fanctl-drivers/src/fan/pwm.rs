//! PWM fan output
//!
//! Drives the fan through any `embedded_hal::pwm::SetDutyCycle` channel.
//! The level in [0, 1] is scaled onto the channel's duty range.

use embedded_hal::pwm::SetDutyCycle;
use fanctl_core::config::FanOutputConfig;
use fanctl_core::traits::FanOutput;

/// PWM fan output
///
/// A write error from the channel is latched in [`PwmFan::is_faulted`]
/// until the next successful write.
pub struct PwmFan<P> {
    pwm: P,
    /// If true, fan ON = duty LOW
    inverted: bool,
    /// Last requested level (clamped to [0, 1])
    level: f32,
    faulted: bool,
}

impl<P: SetDutyCycle> PwmFan<P> {
    /// Create a new PWM fan output
    ///
    /// # Arguments
    /// - `pwm`: The PWM channel to drive
    /// - `inverted`: If true, the fan runs faster as the duty cycle drops
    pub fn new(pwm: P, inverted: bool) -> Self {
        let mut fan = Self {
            pwm,
            inverted,
            level: 0.0,
            faulted: false,
        };
        // Ensure fan starts off
        fan.set_level(0.0);
        fan
    }

    /// Create a new PWM fan with active-high output
    pub fn new_active_high(pwm: P) -> Self {
        Self::new(pwm, false)
    }

    /// Create a new PWM fan with active-low output
    pub fn new_active_low(pwm: P) -> Self {
        Self::new(pwm, true)
    }

    /// Create a PWM fan as described by the output config
    pub fn from_config(pwm: P, config: &FanOutputConfig) -> Self {
        Self::new(pwm, config.inverted)
    }

    /// Duty cycle written for `level`
    pub fn duty_for(&self, level: f32) -> u16 {
        let level = clamp_level(level);
        let level = if self.inverted { 1.0 - level } else { level };
        let max = self.pwm.max_duty_cycle();

        // Round to nearest; `as` saturates at the top
        (level * max as f32 + 0.5) as u16
    }

    /// Check if the last write to the channel failed
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Get access to the PWM channel
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

impl<P: SetDutyCycle> FanOutput for PwmFan<P> {
    fn set_level(&mut self, level: f32) {
        let duty = self.duty_for(level);
        self.level = clamp_level(level);
        self.faulted = self.pwm.set_duty_cycle(duty).is_err();

        #[cfg(feature = "defmt")]
        if self.faulted {
            defmt::warn!("PWM write failed (duty {})", duty);
        }
    }

    fn level(&self) -> f32 {
        self.level
    }
}

/// NaN counts as off
fn clamp_level(level: f32) -> f32 {
    if level > 0.0 {
        level.min(1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{Error, ErrorKind, ErrorType};

    #[derive(Debug)]
    struct MockPwmError;

    impl Error for MockPwmError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock PWM channel for testing
    struct MockPwm {
        duty: u16,
        max: u16,
        fail: bool,
    }

    impl MockPwm {
        fn new(max: u16) -> Self {
            Self {
                duty: 0xFFFF,
                max,
                fail: false,
            }
        }
    }

    impl ErrorType for MockPwm {
        type Error = MockPwmError;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockPwmError);
            }
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_fan() {
        let mut fan = PwmFan::new_active_high(MockPwm::new(1000));

        // Initially off
        assert!(!fan.is_on());
        assert_eq!(fan.pwm.duty, 0);

        fan.set_level(0.52);
        assert!(fan.is_on());
        assert_eq!(fan.pwm.duty, 520);

        fan.set_level(1.0);
        assert_eq!(fan.pwm.duty, 1000);

        fan.set_level(0.0);
        assert!(!fan.is_on());
        assert_eq!(fan.pwm.duty, 0);
    }

    #[test]
    fn test_active_low_fan() {
        let mut fan = PwmFan::new_active_low(MockPwm::new(1000));

        // Off means full duty for active-low
        assert!(!fan.is_on());
        assert_eq!(fan.pwm.duty, 1000);

        fan.set_level(0.25);
        assert_eq!(fan.pwm.duty, 750);

        fan.set_level(1.0);
        assert_eq!(fan.pwm.duty, 0);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let mut fan = PwmFan::new_active_high(MockPwm::new(255));

        fan.set_level(1.7);
        assert_eq!(fan.pwm.duty, 255);
        assert_eq!(fan.level(), 1.0);

        fan.set_level(-0.3);
        assert_eq!(fan.pwm.duty, 0);

        fan.set_level(f32::NAN);
        assert_eq!(fan.pwm.duty, 0);
        assert!(!fan.is_on());
    }

    #[test]
    fn test_full_u16_range() {
        let fan = PwmFan::new_active_high(MockPwm::new(u16::MAX));
        assert_eq!(fan.duty_for(1.0), u16::MAX);
        assert_eq!(fan.duty_for(0.0), 0);
    }

    #[test]
    fn test_write_fault_is_latched() {
        let mut fan = PwmFan::new_active_high(MockPwm::new(100));
        fan.pwm.fail = true;

        fan.set_level(0.5);
        assert!(fan.is_faulted());
        assert_eq!(fan.pwm.duty, 0);

        fan.pwm.fail = false;
        fan.set_level(0.5);
        assert!(!fan.is_faulted());
        assert_eq!(fan.pwm.duty, 50);
    }

    #[test]
    fn test_from_config() {
        let config = FanOutputConfig::inverted(18);
        let fan = PwmFan::from_config(MockPwm::new(100), &config);
        assert_eq!(fan.pwm.duty, 100);
    }
}
