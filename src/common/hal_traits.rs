// src/common/hal_traits.rs

use super::types::EdgeEvent;
use core::fmt::Debug;
use core::ops::Add;
use core::time::Duration;

/// Bounded wait for the next edge on the echo line.
///
/// This is the only place a measurement run blocks on the sensor. The trigger
/// side needs nothing beyond `embedded_hal::digital::OutputPin`.
pub trait EdgeEventSource {
    /// Associated error type for line I/O failures.
    type Error: Debug;

    /// Blocks for at most `timeout` waiting for one edge event.
    ///
    /// Returns `Ok(Some(event))` for a rising or falling edge, `Ok(None)` if
    /// nothing arrived within `timeout`, and `Err` if the wait or the read of
    /// the event failed.
    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, Self::Error>;
}

impl<T: EdgeEventSource + ?Sized> EdgeEventSource for &mut T {
    type Error = T::Error;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, Self::Error> {
        T::wait_for_edge(self, timeout)
    }
}

/// Non-blocking access to a queue of captured edge events.
///
/// Meant for targets where an interrupt or input-capture peripheral records
/// edges and timestamps them; wrap it in
/// [`PollingEdgeSource`](crate::echo::PollingEdgeSource) to get an
/// [`EdgeEventSource`].
pub trait EdgePoll {
    /// Associated error type for capture failures.
    type Error: Debug;

    /// Returns the oldest captured edge, or `Err(nb::Error::WouldBlock)` if
    /// none is pending yet. Other errors are returned as `Err(nb::Error::Other(Self::Error))`.
    fn poll_edge(&mut self) -> nb::Result<EdgeEvent, Self::Error>;
}

/// Monotonic time source used to enforce wait deadlines.
pub trait MonotonicClock {
    /// The instant type. Must support adding a `Duration` and ordering.
    type Instant: Copy + Ord + Add<Duration, Output = Self::Instant>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}
