//! Hardware configuration types
//!
//! Describes where the fan is wired. The control logic never reads these;
//! they are handed to whichever driver applies the level.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default PWM output pin (BCM numbering on the Raspberry Pi header)
pub const DEFAULT_FAN_PIN: u8 = 18;

/// Fan output pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FanOutputConfig {
    /// GPIO pin driving the fan transistor
    pub pin: u8,
    /// Output is active-low (fan runs when the pin is low)
    pub inverted: bool,
}

impl FanOutputConfig {
    /// Create an active-high output on `pin`
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an active-low output on `pin`
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

impl Default for FanOutputConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FAN_PIN)
    }
}
