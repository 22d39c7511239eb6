//! Fan control algorithm
//!
//! The curve maps a temperature to a level; the hysteresis controller
//! decides whether the fan runs at all.

pub mod curve;
pub mod hysteresis;

pub use curve::compute_level;
pub use hysteresis::{FanState, HysteresisController};
