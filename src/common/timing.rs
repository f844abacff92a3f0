// src/common/timing.rs

use core::time::Duration;

// Nominal HC-SR04 timing. The datasheet asks for a >= 10 us trigger and a
// measurement cycle of at least 60 ms so a late echo from the previous pulse
// cannot be mistaken for the current one.

// === Trigger ===

/// Width of the high pulse on the trigger line.
pub const TRIGGER_PULSE_WIDTH: Duration = Duration::from_micros(10);
/// Quiet time before each trigger so the previous echo has fully settled.
pub const SETTLE_DELAY: Duration = Duration::from_millis(60);

// === Echo ===

/// How long to wait for the next edge on the echo line before treating the
/// pulse as missed and re-triggering.
pub const ECHO_WAIT_TIMEOUT: Duration = Duration::from_millis(1);
/// Interval between polls when the edge source has no blocking wait of its own.
pub const POLL_INTERVAL: Duration = Duration::from_micros(10);

// === Batch ===

/// Number of samples reduced into one reported depth.
pub const DEFAULT_BATCH_SIZE: usize = 5;

// === Propagation ===

/// Speed of sound in inches per second (1100 ft/s in air).
pub const SPEED_OF_SOUND_IN_PER_S: f32 = 1100.0 * 12.0;
/// Speed of sound in centimeters per second (343 m/s in air).
pub const SPEED_OF_SOUND_CM_PER_S: f32 = 34_300.0;
