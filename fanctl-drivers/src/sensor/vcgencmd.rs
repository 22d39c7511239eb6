//! Firmware temperature report
//!
//! Parses the output of the Raspberry Pi firmware `measure_temp` query,
//! which looks like `temp=48.3'C`.

use fanctl_core::traits::{SensorError, TemperatureSensor};

use super::{read_report, ReportSource};

/// Extract degrees Celsius from a `temp=<value>'C` report
///
/// Whitespace around the value and a trailing newline are ignored.
pub fn parse_measure_temp(report: &str) -> Result<f32, SensorError> {
    let (_, rest) = report.split_once('=').ok_or(SensorError::Unparseable)?;
    let value = rest.split('\'').next().unwrap_or(rest).trim();

    let temp: f32 = value.parse().map_err(|_| SensorError::Unparseable)?;
    if !temp.is_finite() {
        return Err(SensorError::Unparseable);
    }
    Ok(temp)
}

/// CPU temperature sensor backed by the firmware report
pub struct VcgencmdSensor<R> {
    source: R,
}

impl<R> VcgencmdSensor<R> {
    /// Create a new sensor reading reports from `source`
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Get access to the report source
    pub fn source(&self) -> &R {
        &self.source
    }
}

impl<R: ReportSource> TemperatureSensor for VcgencmdSensor<R> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        read_report(&mut self.source, parse_measure_temp)
    }
}
