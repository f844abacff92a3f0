// src/echo/pulse.rs

use super::delay_for;
use core::time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Drives the sensor's trigger line.
///
/// Owns the output pin for its whole lifetime. One call to [`trigger`](Self::trigger)
/// makes the sensor emit one ultrasonic burst; the caller must not trigger
/// again until that echo has been dealt with.
#[derive(Debug)]
pub struct TriggerPulse<P> {
    pin: P,
    width: Duration,
}

impl<P: OutputPin> TriggerPulse<P> {
    /// Takes ownership of `pin` and drives it low so every pulse starts from
    /// a known level.
    pub fn new(mut pin: P, width: Duration) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, width })
    }

    /// High for the configured width, then low.
    pub fn trigger<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), P::Error> {
        self.pin.set_high()?;
        delay_for(delay, self.width);
        self.pin.set_low()
    }

    pub fn width(&self) -> Duration {
        self.width
    }

    /// Gives the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
