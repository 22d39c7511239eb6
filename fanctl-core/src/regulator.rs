//! Fan regulator
//!
//! Closes the loop for one tick: read the sensor, run the controller, apply
//! the level. Scheduling is left to the caller, who calls [`FanRegulator::update`]
//! once per sample interval.

use crate::control::{FanState, HysteresisController};
use crate::traits::{FanOutput, SensorError, TemperatureSensor};

/// Sensor + controller + fan output
pub struct FanRegulator<S, F> {
    sensor: S,
    fan: F,
    controller: HysteresisController,
    last_temp: Option<f32>,
    last_level: f32,
}

impl<S: TemperatureSensor, F: FanOutput> FanRegulator<S, F> {
    /// Create a new regulator
    ///
    /// The fan is switched off until the first successful update.
    pub fn new(sensor: S, mut fan: F, controller: HysteresisController) -> Self {
        fan.set_level(0.0);
        Self {
            sensor,
            fan,
            controller,
            last_temp: None,
            last_level: 0.0,
        }
    }

    /// Run one control tick
    ///
    /// On a sensor error nothing else happens: the controller is not ticked,
    /// the fan keeps its previous level and the error is returned for the
    /// caller to skip, retry or abort.
    pub fn update(&mut self) -> Result<f32, SensorError> {
        let temp = self.sensor.read_celsius()?;
        self.last_temp = Some(temp);

        let level = self.controller.tick(temp);
        self.fan.set_level(level);
        self.last_level = level;

        Ok(level)
    }

    /// Temperature from the last successful read
    pub fn last_temperature(&self) -> Option<f32> {
        self.last_temp
    }

    /// Level applied by the last successful update
    pub fn last_level(&self) -> f32 {
        self.last_level
    }

    /// Controller state
    pub fn state(&self) -> FanState {
        self.controller.state()
    }

    /// Get access to the controller
    pub fn controller(&self) -> &HysteresisController {
        &self.controller
    }

    /// Get access to the underlying sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Get access to the underlying fan output
    pub fn fan(&self) -> &F {
        &self.fan
    }

    /// Switch the fan off and return the parts
    pub fn release(mut self) -> (S, F, HysteresisController) {
        self.fan.set_level(0.0);
        (self.sensor, self.fan, self.controller)
    }
}
