// src/echo/edge_timer.rs

use crate::common::types::{DistanceUnit, Edge, EdgeEvent, Timestamp};

/// Where the measurement loop stands with respect to the current pulse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EchoState {
    /// No pulse outstanding; the next step is to trigger one.
    AwaitingTrigger,
    /// A pulse was triggered; waiting for its echo edges.
    AwaitingEdgeEvent,
}

/// What one wait on the echo line amounted to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EdgeOutcome {
    /// Rising edge recorded as the start of the echo. Keep waiting.
    EchoStarted,
    /// Falling edge matched the pending rising edge.
    Sample {
        /// Echo pulse width in seconds.
        pulse_width: f32,
        /// Derived one-way distance in the configured unit.
        distance: f32,
    },
    /// Falling edge with no rising edge before it. Dropped.
    Unmatched,
    /// Nothing arrived before the timeout. The pulse is abandoned.
    TimedOut,
}

/// Edge-timing state machine.
///
/// Turns the results of bounded waits on the echo line into distance samples.
/// Holds no I/O itself, the measurement loop feeds it and triggers pulses when
/// [`needs_trigger`](Self::needs_trigger) says so.
#[derive(Debug, Clone)]
pub struct EdgeTimer {
    state: EchoState,
    /// Rising edge still waiting for its falling edge.
    pending: Option<Timestamp>,
    unit: DistanceUnit,
}

impl EdgeTimer {
    pub const fn new(unit: DistanceUnit) -> Self {
        Self {
            state: EchoState::AwaitingTrigger,
            pending: None,
            unit,
        }
    }

    #[inline]
    pub const fn state(&self) -> EchoState {
        self.state
    }

    #[inline]
    pub const fn pending(&self) -> Option<Timestamp> {
        self.pending
    }

    #[inline]
    pub fn needs_trigger(&self) -> bool {
        self.state == EchoState::AwaitingTrigger
    }

    /// Records that a trigger pulse went out. Any leftover rising edge belongs
    /// to an earlier pulse and is dropped.
    pub fn on_triggered(&mut self) {
        self.pending = None;
        self.state = EchoState::AwaitingEdgeEvent;
    }

    /// Feeds the result of one bounded wait: `Some(event)` or `None` on timeout.
    pub fn on_wait(&mut self, waited: Option<EdgeEvent>) -> EdgeOutcome {
        match waited {
            Some(event) => self.on_edge(event),
            None => self.on_timeout(),
        }
    }

    pub fn on_timeout(&mut self) -> EdgeOutcome {
        self.pending = None;
        self.state = EchoState::AwaitingTrigger;
        EdgeOutcome::TimedOut
    }

    pub fn on_edge(&mut self, event: EdgeEvent) -> EdgeOutcome {
        match event.edge {
            Edge::Rising => {
                // A second rising edge without a fall in between replaces the first.
                self.pending = Some(event.timestamp);
                EdgeOutcome::EchoStarted
            }
            Edge::Falling => {
                self.state = EchoState::AwaitingTrigger;
                match self.pending.take() {
                    Some(rising) => {
                        let pulse_width = event.timestamp.seconds_since(rising);
                        EdgeOutcome::Sample {
                            pulse_width,
                            distance: self.unit.distance(pulse_width),
                        }
                    }
                    None => EdgeOutcome::Unmatched,
                }
            }
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: u64, nanos: u32) -> Timestamp {
        Timestamp::new(secs, nanos)
    }

    fn armed(unit: DistanceUnit) -> EdgeTimer {
        let mut timer = EdgeTimer::new(unit);
        timer.on_triggered();
        timer
    }

    #[test]
    fn test_starts_awaiting_trigger() {
        let timer = EdgeTimer::new(DistanceUnit::Inches);
        assert_eq!(timer.state(), EchoState::AwaitingTrigger);
        assert!(timer.needs_trigger());
        assert_eq!(timer.pending(), None);
    }

    #[test]
    fn test_matched_pair_half_second() {
        let mut timer = armed(DistanceUnit::Inches);
        assert_eq!(timer.on_edge(EdgeEvent::rising(ts(0, 0))), EdgeOutcome::EchoStarted);
        assert_eq!(timer.state(), EchoState::AwaitingEdgeEvent);
        assert_eq!(timer.pending(), Some(ts(0, 0)));

        let outcome = timer.on_edge(EdgeEvent::falling(ts(0, 500_000_000)));
        assert_eq!(
            outcome,
            EdgeOutcome::Sample {
                pulse_width: 0.5,
                distance: 0.5 * 13_200.0 / 2.0,
            }
        );
        assert_eq!(timer.pending(), None);
        assert!(timer.needs_trigger());
    }

    #[test]
    fn test_matched_pair_centimeters() {
        let mut timer = armed(DistanceUnit::Centimeters);
        timer.on_edge(EdgeEvent::rising(ts(5, 0)));
        match timer.on_edge(EdgeEvent::falling(ts(5, 500_000_000))) {
            EdgeOutcome::Sample { distance, .. } => assert_eq!(distance, 0.5 * 34_300.0 / 2.0),
            other => panic!("expected a sample, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_falling_edge_is_ignored() {
        let mut timer = armed(DistanceUnit::Inches);
        assert_eq!(timer.on_edge(EdgeEvent::falling(ts(1, 0))), EdgeOutcome::Unmatched);
        assert_eq!(timer.pending(), None);
        // Still re-triggers, same as after a real echo.
        assert!(timer.needs_trigger());
    }

    #[test]
    fn test_timeout_discards_pending() {
        let mut timer = armed(DistanceUnit::Inches);
        timer.on_wait(Some(EdgeEvent::rising(ts(1, 0))));
        assert!(timer.pending().is_some());

        assert_eq!(timer.on_wait(None), EdgeOutcome::TimedOut);
        assert_eq!(timer.pending(), None);
        assert!(timer.needs_trigger());
    }

    #[test]
    fn test_stale_rising_edge_does_not_leak_into_next_pulse() {
        let mut timer = armed(DistanceUnit::Inches);
        // Echo starts, then the fall is missed.
        timer.on_wait(Some(EdgeEvent::rising(ts(1, 0))));
        timer.on_wait(None);

        // Next pulse: a falling edge alone must not pair with the stale rise.
        timer.on_triggered();
        assert_eq!(timer.on_wait(Some(EdgeEvent::falling(ts(1, 900_000_000)))), EdgeOutcome::Unmatched);

        // And a clean pair afterwards measures only itself.
        timer.on_triggered();
        timer.on_wait(Some(EdgeEvent::rising(ts(2, 100_000_000))));
        match timer.on_wait(Some(EdgeEvent::falling(ts(2, 100_500_000)))) {
            EdgeOutcome::Sample { pulse_width, .. } => {
                assert!((pulse_width - 0.000_5).abs() < 1e-6, "width was {}", pulse_width)
            }
            other => panic!("expected a sample, got {:?}", other),
        }
    }

    #[test]
    fn test_trigger_clears_pending() {
        let mut timer = armed(DistanceUnit::Inches);
        timer.on_edge(EdgeEvent::rising(ts(3, 0)));
        timer.on_triggered();
        assert_eq!(timer.pending(), None);
    }

    #[test]
    fn test_last_rising_edge_wins() {
        let mut timer = armed(DistanceUnit::Inches);
        timer.on_edge(EdgeEvent::rising(ts(0, 0)));
        timer.on_edge(EdgeEvent::rising(ts(0, 250_000_000)));
        assert_eq!(timer.pending(), Some(ts(0, 250_000_000)));

        match timer.on_edge(EdgeEvent::falling(ts(0, 500_000_000))) {
            EdgeOutcome::Sample { pulse_width, .. } => assert_eq!(pulse_width, 0.25),
            other => panic!("expected a sample, got {:?}", other),
        }
    }
}
