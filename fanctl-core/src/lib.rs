//! Board-agnostic core logic for the fan regulator
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and validation
//! - Hardware abstraction traits (temperature sensor, fan output)
//! - Temperature-to-level curve
//! - Hysteresis controller deciding when the fan runs at all
//! - Regulator tying a sensor, the controller and a fan together

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod regulator;
pub mod traits;
