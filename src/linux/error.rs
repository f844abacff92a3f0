// src/linux/error.rs

use crate::common::error::EchoError;
use std::string::String;

/// Process exit codes, one per way a run can end.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const CHIP_OPEN: u8 = 1;
    pub const OUTPUT_LINE: u8 = 2;
    pub const INPUT_LINE: u8 = 3;
    pub const MEASUREMENT_IO: u8 = 4;
    pub const TIMEOUTS_EXHAUSTED: u8 = 5;
}

/// Failures on an acquired line, or while acquiring it.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    /// The name is neither `GPIO<n>` nor a bare line offset.
    #[error("no GPIO line named '{0}'")]
    UnknownName(String),

    /// The line was requested in the other direction.
    #[error("line {0} is not configured for this operation")]
    Direction(u8),

    /// Edge events were requested from a line without edge monitoring.
    #[error("line {0} is not monitoring edges")]
    NotMonitored(u8),

    #[error(transparent)]
    Gpio(#[from] rppal::gpio::Error),
}

impl embedded_hal::digital::Error for LineError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Acquisition failures before any measurement is taken.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to open GPIO chip: {0}")]
    ChipOpen(#[source] rppal::gpio::Error),

    #[error("failed to acquire trigger line {name}: {source}")]
    OutputLine {
        name: String,
        #[source]
        source: LineError,
    },

    #[error("failed to acquire echo line {name}: {source}")]
    InputLine {
        name: String,
        #[source]
        source: LineError,
    },
}

impl SetupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::ChipOpen(_) => exit_code::CHIP_OPEN,
            SetupError::OutputLine { .. } => exit_code::OUTPUT_LINE,
            SetupError::InputLine { .. } => exit_code::INPUT_LINE,
        }
    }
}

/// Everything that can end a `sump-monitor` run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("measurement failed: {0}")]
    Measure(#[from] EchoError<LineError, LineError>),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Setup(e) => e.exit_code(),
            RunError::Measure(EchoError::TimeoutsExhausted { .. }) => exit_code::TIMEOUTS_EXHAUSTED,
            RunError::Measure(_) => exit_code::MEASUREMENT_IO,
        }
    }
}
