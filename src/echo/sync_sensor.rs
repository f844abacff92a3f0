// src/echo/sync_sensor.rs

use super::{delay_for, EdgeOutcome, EdgeTimer, TriggerPulse};
use crate::common::{
    config::MeasurementConfig, error::EchoError, hal_traits::EdgeEventSource,
    timing::DEFAULT_BATCH_SIZE,
};
use crate::reduce::SampleBatch;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

type Error<P, S> = EchoError<<P as embedded_hal::digital::ErrorType>::Error, <S as EdgeEventSource>::Error>;

/// Rejects a zero-sized batch at compile time.
struct NonEmptyBatch<const N: usize>;

impl<const N: usize> NonEmptyBatch<N> {
    const OK: () = assert!(N > 0, "batch size must be at least 1");
}

/// HC-SR04-class sensor driven in blocking, single-threaded fashion.
///
/// Owns the trigger pin, the echo line's event source and the delay used for
/// both the trigger pulse and the inter-pulse settle time. Dropping the sensor
/// (or calling [`release`](Self::release)) gives the lines back, whichever way
/// a run ended.
#[derive(Debug)]
pub struct EchoSensor<P, S, D> {
    pulse: TriggerPulse<P>,
    echo: S,
    delay: D,
    config: MeasurementConfig,
}

impl<P, S, D> EchoSensor<P, S, D>
where
    P: OutputPin,
    S: EdgeEventSource,
    D: DelayNs,
{
    pub fn new(trigger: P, echo: S, delay: D, config: MeasurementConfig) -> Result<Self, Error<P, S>> {
        let pulse = TriggerPulse::new(trigger, config.trigger_pulse).map_err(EchoError::Trigger)?;
        Ok(EchoSensor {
            pulse,
            echo,
            delay,
            config,
        })
    }

    pub fn config(&self) -> &MeasurementConfig {
        &self.config
    }

    /// Measures one batch of `N` samples and returns its median.
    pub fn measure_depth<const N: usize>(&mut self) -> Result<f32, Error<P, S>> {
        let () = NonEmptyBatch::<N>::OK;

        let batch = self.measure_batch::<N>()?;
        // N > 0 is checked above, so the batch is never empty here.
        let depth = batch.reduce().unwrap_or(f32::NAN);
        debug!("median {}", depth);
        Ok(depth)
    }

    /// Median of a batch of the default size.
    pub fn measure(&mut self) -> Result<f32, Error<P, S>> {
        self.measure_depth::<DEFAULT_BATCH_SIZE>()
    }

    /// Triggers and times pulses until `N` echoes have been measured.
    ///
    /// Missed echoes and stray falling edges are absorbed and only cost another
    /// trigger. Line I/O failures end the run immediately, as does exceeding
    /// [`MeasurementConfig::max_consecutive_timeouts`] when it is set.
    pub fn measure_batch<const N: usize>(&mut self) -> Result<SampleBatch<N>, Error<P, S>> {
        let mut batch = SampleBatch::<N>::new();
        let mut timer = EdgeTimer::new(self.config.unit);
        let mut consecutive_timeouts: u32 = 0;

        while !batch.is_full() {
            if timer.needs_trigger() {
                delay_for(&mut self.delay, self.config.settle_delay);
                self.pulse
                    .trigger(&mut self.delay)
                    .map_err(EchoError::Trigger)?;
                timer.on_triggered();
            }

            let waited = self
                .echo
                .wait_for_edge(self.config.echo_timeout)
                .map_err(EchoError::Wait)?;

            match timer.on_wait(waited) {
                EdgeOutcome::EchoStarted => {}
                EdgeOutcome::Sample { pulse_width, distance } => {
                    consecutive_timeouts = 0;
                    debug!("{}, {}, {}", pulse_width, batch.len(), distance);
                    if let Err(extra) = batch.push(distance) {
                        warn!("batch already full, dropping {}", extra);
                    }
                }
                EdgeOutcome::Unmatched => {
                    trace!("falling edge without rising edge, ignored");
                }
                EdgeOutcome::TimedOut => {
                    consecutive_timeouts = consecutive_timeouts.saturating_add(1);
                    trace!("no edge within timeout ({} in a row)", consecutive_timeouts);
                    if let Some(limit) = self.config.max_consecutive_timeouts {
                        if consecutive_timeouts > limit {
                            error!("giving up after {} missed pulses", consecutive_timeouts);
                            return Err(EchoError::TimeoutsExhausted {
                                timeouts: consecutive_timeouts,
                            });
                        }
                    }
                }
            }
        }

        Ok(batch)
    }

    /// Gives back the trigger pin, the edge source and the delay.
    pub fn release(self) -> (P, S, D) {
        (self.pulse.release(), self.echo, self.delay)
    }
}
