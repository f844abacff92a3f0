// src/linux/mod.rs

//! Raspberry Pi backend on top of `rppal`.
//!
//! Lines are requested through the GPIO character device; edge timestamps are
//! the kernel's, so scheduling jitter in this process does not show up in the
//! measured pulse width.

pub mod error;
pub mod lines;

pub use error::{exit_code, LineError, RunError, SetupError};
pub use lines::{acquire_line, Line, LineConfig, LineId, Monitoring};

use crate::common::config::MeasurementConfig;
use crate::echo::EchoSensor;
use rppal::gpio::Gpio;
use rppal::hal::Delay;
use std::string::ToString;

/// Sensor wired to two Raspberry Pi GPIO lines.
pub type PiEchoSensor = EchoSensor<Line, Line, Delay>;

/// Opens the GPIO chip and requests the trigger (output) and echo
/// (both-edge monitored input) lines by name.
///
/// Anything acquired before a failure is released on the way out.
pub fn open_sensor(
    trigger: &str,
    echo: &str,
    config: MeasurementConfig,
) -> Result<PiEchoSensor, RunError> {
    let gpio = Gpio::new().map_err(SetupError::ChipOpen)?;

    let trigger_line = trigger
        .parse::<LineId>()
        .and_then(|id| acquire_line(&gpio, id, LineConfig::Output))
        .map_err(|source| SetupError::OutputLine {
            name: trigger.to_string(),
            source,
        })?;

    let echo_line = echo
        .parse::<LineId>()
        .and_then(|id| {
            acquire_line(
                &gpio,
                id,
                LineConfig::Input {
                    monitoring: Monitoring::BothEdges,
                },
            )
        })
        .map_err(|source| SetupError::InputLine {
            name: echo.to_string(),
            source,
        })?;

    Ok(EchoSensor::new(trigger_line, echo_line, Delay::new(), config)?)
}
