//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in fanctl-core:
//!
//! - Temperature sensors (firmware `measure_temp` report, sysfs thermal zone)
//! - Fan outputs (PWM duty cycle, plain GPIO on/off)

#![no_std]
#![deny(unsafe_code)]

pub mod fan;
pub mod sensor;
