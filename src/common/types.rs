// src/common/types.rs

use core::fmt;
use core::time::Duration;

use super::timing;

const NANOS_PER_SEC: u32 = 1_000_000_000;

// --- Timestamp ---

/// A monotonic instant reported by the edge event source.
///
/// Only ever subtracted from another `Timestamp` of the same source; it has no
/// relation to wall-clock time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    secs: u64,
    nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp, carrying whole seconds out of `nanos`.
    pub const fn new(secs: u64, nanos: u32) -> Self {
        Self {
            secs: secs + (nanos / NANOS_PER_SEC) as u64,
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Creates a timestamp from an offset since the source's epoch.
    pub const fn from_duration(since_epoch: Duration) -> Self {
        Self {
            secs: since_epoch.as_secs(),
            nanos: since_epoch.subsec_nanos(),
        }
    }

    #[inline]
    pub const fn secs(&self) -> u64 {
        self.secs
    }

    #[inline]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// The nanosecond and second parts are subtracted independently and then
    /// combined, so a borrow across the second boundary comes out right.
    /// Negative when `earlier` is actually later.
    pub fn seconds_since(&self, earlier: Timestamp) -> f32 {
        let nanos = i64::from(self.nanos) - i64::from(earlier.nanos);
        let secs = self.secs as i64 - earlier.secs as i64;
        nanos as f32 / NANOS_PER_SEC as f32 + secs as f32
    }
}

impl From<Duration> for Timestamp {
    fn from(value: Duration) -> Self {
        Self::from_duration(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}

// --- Edge events ---

/// Direction of a transition on the echo line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Edge {
    /// Low to high: the sensor started its echo pulse.
    Rising,
    /// High to low: the echo pulse ended.
    Falling,
}

/// One hardware-timestamped transition on the echo line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeEvent {
    pub edge: Edge,
    pub timestamp: Timestamp,
}

impl EdgeEvent {
    pub const fn rising(timestamp: Timestamp) -> Self {
        Self { edge: Edge::Rising, timestamp }
    }

    pub const fn falling(timestamp: Timestamp) -> Self {
        Self { edge: Edge::Falling, timestamp }
    }
}

// --- Units ---

/// Unit the distance samples are expressed in.
///
/// Fixed at configuration time; the speed-of-sound constant is chosen so the
/// result lands directly in this unit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Inches, based on 1100 ft/s.
    #[default]
    Inches,
    /// Centimeters, based on 343 m/s.
    Centimeters,
}

impl DistanceUnit {
    /// Propagation speed in this unit per second.
    pub const fn speed_of_sound(&self) -> f32 {
        match self {
            DistanceUnit::Inches => timing::SPEED_OF_SOUND_IN_PER_S,
            DistanceUnit::Centimeters => timing::SPEED_OF_SOUND_CM_PER_S,
        }
    }

    /// One-way distance for an echo pulse of `pulse_width` seconds.
    pub fn distance(&self, pulse_width: f32) -> f32 {
        pulse_width * self.speed_of_sound() / 2.0
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Inches => "in",
            DistanceUnit::Centimeters => "cm",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
