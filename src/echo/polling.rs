// src/echo/polling.rs

use super::delay_for;
use crate::common::{
    hal_traits::{EdgeEventSource, EdgePoll, MonotonicClock},
    timing,
    types::EdgeEvent,
};
use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Bounded wait built from a non-blocking edge queue, a clock and a delay.
///
/// The event timestamps still come from whatever captured the edge, so the
/// poll interval only affects how quickly an edge is noticed, not the
/// measured pulse width.
#[derive(Debug)]
pub struct PollingEdgeSource<S, C, D> {
    source: S,
    clock: C,
    delay: D,
    poll_interval: Duration,
}

impl<S, C, D> PollingEdgeSource<S, C, D>
where
    S: EdgePoll,
    C: MonotonicClock,
    D: DelayNs,
{
    pub fn new(source: S, clock: C, delay: D) -> Self {
        Self {
            source,
            clock,
            delay,
            poll_interval: timing::POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn release(self) -> (S, C, D) {
        (self.source, self.clock, self.delay)
    }
}

impl<S, C, D> EdgeEventSource for PollingEdgeSource<S, C, D>
where
    S: EdgePoll,
    C: MonotonicClock,
    D: DelayNs,
{
    type Error = S::Error;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, Self::Error> {
        let deadline = self.clock.now() + timeout;

        loop {
            match self.source.poll_edge() {
                Ok(event) => return Ok(Some(event)),
                Err(nb::Error::WouldBlock) => {
                    if self.clock.now() >= deadline {
                        return Ok(None);
                    }
                    delay_for(&mut self.delay, self.poll_interval);
                }
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }
}
