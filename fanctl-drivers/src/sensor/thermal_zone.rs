//! Thermal zone temperature report
//!
//! Linux exposes the SoC temperature as an integer in millidegrees
//! Celsius, e.g. `48312` for 48.312°C.

use fanctl_core::traits::{SensorError, TemperatureSensor};

use super::{read_report, ReportSource};

/// Convert a millidegree report to degrees Celsius
pub fn parse_millidegrees(report: &str) -> Result<f32, SensorError> {
    let millis: i32 = report
        .trim()
        .parse()
        .map_err(|_| SensorError::Unparseable)?;
    Ok(millis as f32 / 1000.0)
}

/// CPU temperature sensor backed by a thermal zone
pub struct ThermalZoneSensor<R> {
    source: R,
}

impl<R> ThermalZoneSensor<R> {
    /// Create a new sensor reading reports from `source`
    pub fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R: ReportSource> TemperatureSensor for ThermalZoneSensor<R> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        read_report(&mut self.source, parse_millidegrees)
    }
}
