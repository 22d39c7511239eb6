//! Fan curve configuration
//!
//! A [`FanConfig`] can only be obtained through validation, so anything built
//! from one may rely on `temp_min < temp_max` and both levels in [0, 1].

use core::cmp::Ordering;
use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature (or lower) where the fan is off (°C)
pub const DEFAULT_TEMP_MIN: f32 = 40.0;

/// Temperature (or higher) where the fan runs at full speed (°C)
pub const DEFAULT_TEMP_MAX: f32 = 49.0;

/// Level applied just above `temp_min`
pub const DEFAULT_LEVEL_LOW: f32 = 0.0;

/// Level approached just below `temp_max`
pub const DEFAULT_LEVEL_HIGH: f32 = 1.0;

/// How often the sensor is sampled (seconds)
pub const DEFAULT_SAMPLE_INTERVAL_S: u16 = 2;

/// Upper bound on warnings a single config can raise
pub const MAX_WARNINGS: usize = 2;

/// Configuration rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `temp_min` is not strictly below `temp_max`, or a bound is not finite
    InvalidTemperatureRange,
    /// `level_low` or `level_high` lies outside [0, 1]
    LevelOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTemperatureRange => {
                f.write_str("temp_min must be less than temp_max")
            }
            ConfigError::LevelOutOfRange => {
                f.write_str("level_low and level_high must be within 0.0..=1.0")
            }
        }
    }
}

/// Accepted but suspicious configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigWarning {
    /// The activation threshold does not lie above `temp_min`.
    ///
    /// The forced-off check runs after activation on every tick, so with
    /// this layout the fan can never stay on.
    ActivationBelowCutoff,
    /// `level_low` is above `level_high`, so the curve falls as the
    /// temperature rises
    InvertedLevels,
}

/// Unvalidated configuration values
///
/// This is the shape read from config files and persisted storage.
/// Convert it with [`FanConfig::from_fields`] before use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FanConfigFields {
    /// Temperature at or below which the fan is off (°C)
    pub temp_min: f32,
    /// Temperature at or above which the fan is at full speed (°C)
    pub temp_max: f32,
    /// Level just above `temp_min` (0.0-1.0)
    pub level_low: f32,
    /// Level just below `temp_max` (0.0-1.0)
    pub level_high: f32,
    /// Sampling period in seconds
    #[cfg_attr(feature = "serde", serde(rename = "sample_interval"))]
    pub sample_interval_s: u16,
}

impl Default for FanConfigFields {
    fn default() -> Self {
        Self {
            temp_min: DEFAULT_TEMP_MIN,
            temp_max: DEFAULT_TEMP_MAX,
            level_low: DEFAULT_LEVEL_LOW,
            level_high: DEFAULT_LEVEL_HIGH,
            sample_interval_s: DEFAULT_SAMPLE_INTERVAL_S,
        }
    }
}

/// Validated fan curve configuration
///
/// Immutable once built. The sample interval is carried for the loop that
/// drives the controller; the control algorithm itself never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FanConfigFields", into = "FanConfigFields")
)]
pub struct FanConfig {
    temp_min: f32,
    temp_max: f32,
    level_low: f32,
    level_high: f32,
    sample_interval_s: u16,
}

impl FanConfig {
    /// Create a config with the default sample interval
    pub fn new(
        temp_min: f32,
        temp_max: f32,
        level_low: f32,
        level_high: f32,
    ) -> Result<Self, ConfigError> {
        Self::from_fields(FanConfigFields {
            temp_min,
            temp_max,
            level_low,
            level_high,
            sample_interval_s: DEFAULT_SAMPLE_INTERVAL_S,
        })
    }

    /// Validate raw fields
    pub fn from_fields(fields: FanConfigFields) -> Result<Self, ConfigError> {
        if !fields.temp_min.is_finite() || !fields.temp_max.is_finite() {
            return Err(ConfigError::InvalidTemperatureRange);
        }
        if fields.temp_min.partial_cmp(&fields.temp_max) != Some(Ordering::Less) {
            return Err(ConfigError::InvalidTemperatureRange);
        }
        if !is_unit(fields.level_low) || !is_unit(fields.level_high) {
            return Err(ConfigError::LevelOutOfRange);
        }

        Ok(Self {
            temp_min: fields.temp_min,
            temp_max: fields.temp_max,
            level_low: fields.level_low,
            level_high: fields.level_high,
            sample_interval_s: fields.sample_interval_s,
        })
    }

    /// Replace the sample interval
    pub fn with_sample_interval_s(mut self, sample_interval_s: u16) -> Self {
        self.sample_interval_s = sample_interval_s;
        self
    }

    pub fn temp_min(&self) -> f32 {
        self.temp_min
    }

    pub fn temp_max(&self) -> f32 {
        self.temp_max
    }

    pub fn level_low(&self) -> f32 {
        self.level_low
    }

    pub fn level_high(&self) -> f32 {
        self.level_high
    }

    pub fn sample_interval_s(&self) -> u16 {
        self.sample_interval_s
    }

    /// Sample interval in milliseconds, for tickers that count in ms
    pub fn sample_interval_ms(&self) -> u32 {
        self.sample_interval_s as u32 * 1000
    }

    /// Temperature above which an idle fan is switched on
    ///
    /// The midpoint of `temp_min` and `temp_max`.
    pub fn threshold(&self) -> f32 {
        (self.temp_max + self.temp_min) / 2.0
    }

    /// Collect warnings for a layout that is valid but likely unintended
    pub fn warnings(&self) -> Vec<ConfigWarning, MAX_WARNINGS> {
        let mut warnings = Vec::new();

        // Capacity matches the number of checks, pushes cannot fail
        if self.threshold() <= self.temp_min {
            let _ = warnings.push(ConfigWarning::ActivationBelowCutoff);
        }
        if self.level_low > self.level_high {
            let _ = warnings.push(ConfigWarning::InvertedLevels);
        }

        warnings
    }

    /// Return the raw field values
    pub fn fields(&self) -> FanConfigFields {
        FanConfigFields {
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            level_low: self.level_low,
            level_high: self.level_high,
            sample_interval_s: self.sample_interval_s,
        }
    }
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            temp_min: DEFAULT_TEMP_MIN,
            temp_max: DEFAULT_TEMP_MAX,
            level_low: DEFAULT_LEVEL_LOW,
            level_high: DEFAULT_LEVEL_HIGH,
            sample_interval_s: DEFAULT_SAMPLE_INTERVAL_S,
        }
    }
}

impl TryFrom<FanConfigFields> for FanConfig {
    type Error = ConfigError;

    fn try_from(fields: FanConfigFields) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<FanConfig> for FanConfigFields {
    fn from(config: FanConfig) -> Self {
        config.fields()
    }
}

fn is_unit(level: f32) -> bool {
    (0.0..=1.0).contains(&level)
}
