//! Temperature sensor implementations
//!
//! Both sensors parse a short text report. Where the report comes from
//! (a child process, a file, a mailbox call) is up to the [`ReportSource`].

pub mod thermal_zone;
pub mod vcgencmd;

pub use thermal_zone::{parse_millidegrees, ThermalZoneSensor};
pub use vcgencmd::{parse_measure_temp, VcgencmdSensor};

use fanctl_core::traits::SensorError;

/// Largest report read in one go
pub const REPORT_BUF_LEN: usize = 32;

/// Text report source for platform abstraction
pub trait ReportSource {
    /// Write one report into `buf` and return its length in bytes
    #[allow(clippy::result_unit_err)]
    fn fetch(&mut self, buf: &mut [u8]) -> Result<usize, ()>;
}

/// Fetch a report and hand it to `parse` as text
fn read_report<R: ReportSource>(
    source: &mut R,
    parse: fn(&str) -> Result<f32, SensorError>,
) -> Result<f32, SensorError> {
    let mut buf = [0u8; REPORT_BUF_LEN];
    let len = source
        .fetch(&mut buf)
        .map_err(|_| SensorError::Unavailable)?;
    let bytes = buf.get(..len).ok_or(SensorError::Unavailable)?;
    let report = core::str::from_utf8(bytes).map_err(|_| SensorError::Unparseable)?;
    parse(report)
}

/// Report source replaying a fixed string (for testing)
#[cfg(test)]
pub struct FixedReport(pub Option<&'static str>);

#[cfg(test)]
impl ReportSource for FixedReport {
    fn fetch(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let report = self.0.ok_or(())?.as_bytes();
        let len = report.len().min(buf.len());
        buf[..len].copy_from_slice(&report[..len]);
        Ok(len)
    }
}
