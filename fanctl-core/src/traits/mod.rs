//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! board-specific sensor and fan drivers.

pub mod fan;

pub use fan::{FanOutput, SensorError, TemperatureSensor};
