// src/report.rs

use arrayvec::ArrayString;
use core::fmt::{self, Write};

/// Sensor name used in the record when the caller has nothing better.
pub const DEFAULT_SENSOR_NAME: &str = "HC-SR04";

/// Capacity of a formatted record; enough for any `u64` time, any `f32`
/// depth to one decimal and a sensor name of up to 32 bytes.
pub const REPORT_LINE_CAPACITY: usize = 128;

/// One reduced depth reading, ready to be written out.
///
/// Formats as a single-line JSON object:
/// `{"t":1700000000, "depth":11.8, "sensor":"HC-SR04"}`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthReport<'a> {
    /// Wall-clock time of the report, seconds since the Unix epoch.
    pub t: u64,
    /// Reduced depth in the configured unit.
    pub depth: f32,
    pub sensor: &'a str,
}

impl<'a> DepthReport<'a> {
    pub const fn new(t: u64, depth: f32, sensor: &'a str) -> Self {
        Self { t, depth, sensor }
    }

    /// Renders the record into a fixed-capacity buffer.
    pub fn format_into(&self) -> Result<ArrayString<REPORT_LINE_CAPACITY>, fmt::Error> {
        let mut line = ArrayString::new();
        write!(line, "{}", self)?;
        Ok(line)
    }
}

impl fmt::Display for DepthReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"t\":{}, \"depth\":{:.1}, \"sensor\":\"", self.t, self.depth)?;
        write_escaped(f, self.sensor)?;
        f.write_str("\"}")
    }
}

/// Writes `s` as the body of a JSON string.
fn write_escaped<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
