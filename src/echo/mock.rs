// src/echo/mock.rs

// Test doubles shared by the echo unit tests. Clones share state so a test can
// hand one copy to the code under test and inspect the other.

use crate::common::{
    hal_traits::{EdgeEventSource, EdgePoll, MonotonicClock},
    types::EdgeEvent,
};
use core::time::Duration;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

/// Ordered record of what happened on both lines, for checking interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    High,
    Low,
    Wait,
}

pub type OpLog = Rc<RefCell<Vec<LineOp>>>;

// --- Mock Pin ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockPin {
    levels: Rc<RefCell<Vec<bool>>>,
    writes_left: Rc<Cell<Option<usize>>>,
    log: Option<OpLog>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: OpLog) -> Self {
        Self { log: Some(log), ..Self::default() }
    }

    pub fn levels(&self) -> Vec<bool> {
        self.levels.borrow().clone()
    }

    /// Lets `n` more writes succeed, then fails every write.
    pub fn fail_after(&self, n: usize) {
        self.writes_left.set(Some(n));
    }

    fn write(&mut self, level: bool) -> Result<(), MockPinError> {
        if let Some(left) = self.writes_left.get() {
            if left == 0 {
                return Err(MockPinError);
            }
            self.writes_left.set(Some(left - 1));
        }
        self.levels.borrow_mut().push(level);
        if let Some(log) = &self.log {
            log.borrow_mut().push(if level { LineOp::High } else { LineOp::Low });
        }
        Ok(())
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

// --- Mock Time ---
/// Fake monotonic time. Delays advance it; the clock reads it.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    elapsed_ns: Rc<Cell<u64>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns.get())
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + u64::from(ns));
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MockInstant(pub u64);

impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_nanos() as u64))
    }
}

impl MonotonicClock for MockDelay {
    type Instant = MockInstant;
    fn now(&self) -> Self::Instant {
        MockInstant(self.elapsed_ns.get())
    }
}

// --- Scripted Edge Source ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockWaitError;

/// Replays a fixed script of wait results. Once the script runs out every
/// wait times out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEdges {
    script: Rc<RefCell<VecDeque<Result<Option<EdgeEvent>, MockWaitError>>>>,
    timeouts_seen: Rc<RefCell<Vec<Duration>>>,
    log: Option<OpLog>,
}

impl ScriptedEdges {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Result<Option<EdgeEvent>, MockWaitError>>,
    {
        Self {
            script: Rc::new(RefCell::new(script.into_iter().collect())),
            ..Self::default()
        }
    }

    pub fn with_log(mut self, log: OpLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn waits(&self) -> usize {
        self.timeouts_seen.borrow().len()
    }

    pub fn timeouts_seen(&self) -> Vec<Duration> {
        self.timeouts_seen.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }
}

impl EdgeEventSource for ScriptedEdges {
    type Error = MockWaitError;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Option<EdgeEvent>, Self::Error> {
        self.timeouts_seen.borrow_mut().push(timeout);
        if let Some(log) = &self.log {
            log.borrow_mut().push(LineOp::Wait);
        }
        self.script.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}

// --- Polled Edge Queue ---
/// Edge capture queue that only becomes readable once the shared clock has
/// reached each event's release time.
#[derive(Debug)]
pub struct CaptureQueue {
    clock: MockDelay,
    queue: VecDeque<(Duration, nb::Result<EdgeEvent, MockWaitError>)>,
    pub polls: usize,
}

impl CaptureQueue {
    pub fn new(clock: MockDelay) -> Self {
        Self { clock, queue: VecDeque::new(), polls: 0 }
    }

    pub fn push_at(&mut self, at: Duration, item: nb::Result<EdgeEvent, MockWaitError>) {
        self.queue.push_back((at, item));
    }
}

impl EdgePoll for CaptureQueue {
    type Error = MockWaitError;

    fn poll_edge(&mut self) -> nb::Result<EdgeEvent, Self::Error> {
        self.polls += 1;
        let now = self.clock.total();
        let ready = matches!(self.queue.front(), Some((at, _)) if *at <= now);
        if !ready {
            return Err(nb::Error::WouldBlock);
        }
        self.queue
            .pop_front()
            .map_or(Err(nb::Error::WouldBlock), |(_, item)| item)
    }
}
