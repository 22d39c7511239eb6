//! Temperature sensor and fan output traits

/// Errors that can occur when sampling the temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No reading could be obtained (source missing or failed)
    Unavailable,
    /// A reading was obtained but could not be parsed into a finite value
    Unparseable,
}

/// Trait for temperature sensors
///
/// Implementations wrap whatever reports the CPU temperature: a firmware
/// query, a sysfs thermal zone, an on-die ADC channel.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// A returned `Ok` value is always finite.
    ///
    /// Takes `&mut self` because reads typically require mutable access.
    fn read_celsius(&mut self) -> Result<f32, SensorError>;
}

/// Trait for fan output control
///
/// Implementations drive the fan via PWM or a plain GPIO. Output faults are
/// the implementation's own business and are not reported back.
pub trait FanOutput {
    /// Apply an actuation level in [0, 1], where 0 is off and 1 is full speed
    fn set_level(&mut self, level: f32);

    /// The level last applied
    fn level(&self) -> f32;

    /// Check if the fan is currently driven at all
    fn is_on(&self) -> bool {
        self.level() > 0.0
    }
}
