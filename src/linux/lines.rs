// src/linux/lines.rs

use super::error::LineError;
use crate::common::{
    hal_traits::EdgeEventSource,
    types::{EdgeEvent, Timestamp},
};
use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use rppal::gpio::{Gpio, InputPin, OutputPin, Trigger};
use std::string::ToString;
use std::time::Instant;

// --- Line naming ---

/// A GPIO line, by BCM offset. Parses from `GPIO23` or plain `23`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineId(pub u8);

impl FromStr for LineId {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("GPIO").unwrap_or(s);
        digits
            .parse::<u8>()
            .map(LineId)
            .map_err(|_| LineError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

// --- Line configuration ---

/// Whether an input line reports edge events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Monitoring {
    None,
    BothEdges,
}

/// How a line is requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineConfig {
    /// Output, initially driven low.
    Output,
    Input { monitoring: Monitoring },
}

enum LineKind {
    Output(OutputPin),
    Input { pin: InputPin, monitoring: Monitoring },
}

/// An acquired line. The kernel request is released when this is dropped.
pub struct Line {
    id: LineId,
    kind: LineKind,
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            LineKind::Output(_) => "output",
            LineKind::Input { monitoring: Monitoring::None, .. } => "input",
            LineKind::Input { monitoring: Monitoring::BothEdges, .. } => "input, both edges",
        };
        f.debug_struct("Line").field("id", &self.id).field("kind", &kind).finish()
    }
}

/// Requests line `id` from `gpio` as described by `config`.
pub fn acquire_line(gpio: &Gpio, id: LineId, config: LineConfig) -> Result<Line, LineError> {
    let pin = gpio.get(id.0)?;
    let kind = match config {
        LineConfig::Output => LineKind::Output(pin.into_output_low()),
        LineConfig::Input { monitoring } => {
            let mut pin = pin.into_input();
            if monitoring == Monitoring::BothEdges {
                pin.set_interrupt(Trigger::Both, None)?;
            }
            LineKind::Input { pin, monitoring }
        }
    };
    log::debug!("acquired {} as {:?}", id, config);
    Ok(Line { id, kind })
}

impl Line {
    pub fn id(&self) -> LineId {
        self.id
    }
}

// --- embedded-hal ---

impl embedded_hal::digital::ErrorType for Line {
    type Error = LineError;
}

impl embedded_hal::digital::OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        match &mut self.kind {
            LineKind::Output(pin) => {
                pin.set_low();
                Ok(())
            }
            LineKind::Input { .. } => Err(LineError::Direction(self.id.0)),
        }
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match &mut self.kind {
            LineKind::Output(pin) => {
                pin.set_high();
                Ok(())
            }
            LineKind::Input { .. } => Err(LineError::Direction(self.id.0)),
        }
    }
}

impl embedded_hal::digital::InputPin for Line {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match &self.kind {
            LineKind::Input { pin, .. } => Ok(pin.is_high()),
            LineKind::Output(_) => Err(LineError::Direction(self.id.0)),
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        <Self as embedded_hal::digital::InputPin>::is_high(self).map(|high| !high)
    }
}

// --- Edge events ---

impl EdgeEventSource for Line {
    type Error = LineError;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, Self::Error> {
        let id = self.id.0;
        let pin = match &mut self.kind {
            LineKind::Input { pin, monitoring: Monitoring::BothEdges } => pin,
            LineKind::Input { .. } => return Err(LineError::NotMonitored(id)),
            LineKind::Output(_) => return Err(LineError::Direction(id)),
        };

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(event) = pin.poll_interrupt(false, Some(remaining))? else {
                return Ok(None);
            };
            let timestamp = Timestamp::from_duration(event.timestamp);
            match event.trigger {
                Trigger::RisingEdge => return Ok(Some(EdgeEvent::rising(timestamp))),
                Trigger::FallingEdge => return Ok(Some(EdgeEvent::falling(timestamp))),
                other => {
                    // Keep waiting for a real edge within the same bound.
                    log::warn!("unknown event type {:?} on GPIO{}", other, id);
                    if remaining.is_zero() {
                        return Ok(None);
                    }
                }
            }
        }
    }
}
