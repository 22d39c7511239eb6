//! Hysteresis fan controller
//!
//! Two states, switched on every tick in this order:
//!
//! 1. `Idle` and `temp > threshold` => `Active`
//! 2. `temp < temp_min` => `Idle`, level forced to 0 (overrides step 1)
//! 3. `Active` => level from [`compute_level`]
//! 4. `Idle` => level 0, the curve is not consulted
//!
//! `threshold` is the midpoint of `temp_min` and `temp_max`. The fan starts
//! only once the temperature is clearly above the midpoint, and stops only
//! once it has fallen back below `temp_min`.

use heapless::Vec;

use super::curve::compute_level;
use crate::config::{ConfigError, ConfigWarning, FanConfig, FanConfigFields, MAX_WARNINGS};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanState {
    /// Fan disabled
    #[default]
    Idle,
    /// Fan enabled, level follows the curve
    Active,
}

/// Hysteresis controller
///
/// Owns the only mutable control state. `tick` takes `&mut self`; callers
/// sharing a controller between tasks must wrap it in a mutex.
#[derive(Debug, Clone)]
pub struct HysteresisController {
    config: FanConfig,
    /// Computed once from `config`
    threshold: f32,
    fan_enabled: bool,
}

impl HysteresisController {
    /// Create a controller in the `Idle` state
    pub fn new(config: FanConfig) -> Self {
        #[cfg(feature = "defmt")]
        for warning in config.warnings().iter() {
            defmt::warn!("Fan config warning: {}", warning);
        }

        Self {
            threshold: config.threshold(),
            config,
            fan_enabled: false,
        }
    }

    /// Validate raw fields and create a controller
    ///
    /// No controller is produced if the fields are invalid.
    pub fn from_fields(fields: FanConfigFields) -> Result<Self, ConfigError> {
        FanConfig::from_fields(fields).map(Self::new)
    }

    /// Process one temperature sample and return the level to apply
    pub fn tick(&mut self, temp: f32) -> f32 {
        if !self.fan_enabled && temp > self.threshold {
            self.fan_enabled = true;
            #[cfg(feature = "defmt")]
            defmt::debug!("Fan on at {}C (threshold {}C)", temp, self.threshold);
        }

        if temp < self.config.temp_min() {
            if self.fan_enabled {
                #[cfg(feature = "defmt")]
                defmt::debug!("Fan off at {}C", temp);
            }
            self.fan_enabled = false;
            return 0.0;
        }

        if self.fan_enabled {
            compute_level(temp, &self.config)
        } else {
            0.0
        }
    }

    /// Current state
    pub fn state(&self) -> FanState {
        if self.fan_enabled {
            FanState::Active
        } else {
            FanState::Idle
        }
    }

    /// Check if the fan is currently enabled
    pub fn is_fan_on(&self) -> bool {
        self.fan_enabled
    }

    /// Activation threshold (°C)
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Get the configuration
    pub fn config(&self) -> &FanConfig {
        &self.config
    }

    /// Warnings raised by the configuration
    pub fn warnings(&self) -> Vec<ConfigWarning, MAX_WARNINGS> {
        self.config.warnings()
    }

    /// Return to `Idle` without a sample
    pub fn reset(&mut self) {
        self.fan_enabled = false;
    }
}
