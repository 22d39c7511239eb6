//! TOML configuration file
//!
//! Two sections, both optional; missing keys take the defaults:
//!
//! ```toml
//! [fan]
//! temp_min = 40
//! temp_max = 49
//! level_low = 0.0
//! level_high = 1.0
//! sample_interval = 2
//!
//! [output]
//! pin = 18
//! inverted = false
//! ```

use core::fmt;

use fanctl_core::config::{ConfigError, FanConfig, FanConfigFields, FanOutputConfig};
use serde::{Deserialize, Serialize};

/// Embedded default configuration
pub const EMBEDDED_CONFIG: &str = include_str!("../fan.toml");

/// Raw file contents
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FanFile {
    /// `[fan]` section
    pub fan: FanConfigFields,
    /// `[output]` section
    pub output: FanOutputConfig,
}

/// Validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadedConfig {
    /// Fan curve
    pub fan: FanConfig,
    /// Fan output wiring
    pub output: FanOutputConfig,
}

/// Configuration load errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Not valid TOML, or keys/types do not match
    Toml(toml::de::Error),
    /// Well-formed but rejected by validation
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(e: toml::de::Error) -> Self {
        LoadError::Toml(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Toml(e) => write!(f, "config syntax: {}", e),
            LoadError::Invalid(e) => write!(f, "invalid config: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LoadError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LoadError::Toml(_) => defmt::write!(f, "Toml"),
            LoadError::Invalid(e) => defmt::write!(f, "Invalid({})", e),
        }
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<LoadedConfig, LoadError> {
    let file: FanFile = toml::from_str(input)?;
    let fan = FanConfig::from_fields(file.fan)?;

    #[cfg(feature = "defmt")]
    for warning in fan.warnings().iter() {
        defmt::warn!("Config warning: {}", warning);
    }

    Ok(LoadedConfig {
        fan,
        output: file.output,
    })
}

/// Parse the embedded default configuration
pub fn default_config() -> Result<LoadedConfig, LoadError> {
    parse_config(EMBEDDED_CONFIG)
}
