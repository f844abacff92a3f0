// src/common/error.rs

/// Fatal conditions that end a measurement run.
///
/// Timeouts and unmatched edges are not errors; they are absorbed by the
/// state machine and only surface here once an optional timeout budget runs out.
#[derive(Debug, thiserror::Error)]
pub enum EchoError<TE = (), WE = ()>
where
    TE: core::fmt::Debug,
    WE: core::fmt::Debug,
{
    /// Driving the trigger line failed.
    #[error("trigger line I/O error: {0:?}")]
    Trigger(TE),

    /// Waiting for or reading an edge event on the echo line failed.
    #[error("echo line I/O error: {0:?}")]
    Wait(WE),

    /// The configured number of missed pulses was exceeded before the batch filled.
    #[error("no echo after {timeouts} consecutive timeouts")]
    TimeoutsExhausted { timeouts: u32 },
}

impl<TE, WE> EchoError<TE, WE>
where
    TE: core::fmt::Debug,
    WE: core::fmt::Debug,
{
    /// True for failures of the underlying line I/O, as opposed to giving up.
    pub fn is_io(&self) -> bool {
        matches!(self, EchoError::Trigger(_) | EchoError::Wait(_))
    }
}
