// src/common/config.rs

use super::{timing, types::DistanceUnit};
use core::time::Duration;

/// Tunables for one measurement run.
///
/// `Default` reproduces the reference behavior: inches, 10 us trigger,
/// 60 ms settle, 1 ms edge timeout and no limit on missed pulses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MeasurementConfig {
    /// Unit the samples and the reduced depth are expressed in.
    pub unit: DistanceUnit,
    /// High time of the trigger pulse.
    pub trigger_pulse: Duration,
    /// Delay before every trigger.
    pub settle_delay: Duration,
    /// Bound on each wait for an edge.
    pub echo_timeout: Duration,
    /// Give up after this many timeouts in a row without a new sample.
    /// `None` keeps re-triggering forever.
    pub max_consecutive_timeouts: Option<u32>,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            trigger_pulse: timing::TRIGGER_PULSE_WIDTH,
            settle_delay: timing::SETTLE_DELAY,
            echo_timeout: timing::ECHO_WAIT_TIMEOUT,
            max_consecutive_timeouts: None,
        }
    }
}

impl MeasurementConfig {
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_max_consecutive_timeouts(mut self, limit: u32) -> Self {
        self.max_consecutive_timeouts = Some(limit);
        self
    }
}
