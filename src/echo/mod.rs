// src/echo/mod.rs

// Trigger side, echo timing and the loop that ties them together.
pub mod edge_timer;
pub mod polling;
pub mod pulse;
pub mod sync_sensor;

#[cfg(test)]
mod mock;

pub use edge_timer::{EchoState, EdgeOutcome, EdgeTimer};
pub use polling::PollingEdgeSource;
pub use pulse::TriggerPulse;
pub use sync_sensor::EchoSensor;

use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Blocks for `d`, saturating at what `DelayNs` can express in one call.
pub(crate) fn delay_for<D: DelayNs>(delay: &mut D, d: Duration) {
    match u32::try_from(d.as_nanos()) {
        Ok(ns) => delay.delay_ns(ns),
        Err(_) => delay.delay_us(u32::try_from(d.as_micros()).unwrap_or(u32::MAX)),
    }
}
