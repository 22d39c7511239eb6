//! Fan output implementations

pub mod gpio;
pub mod pwm;

pub use gpio::GpioFan;
pub use pwm::PwmFan;
