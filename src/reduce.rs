// src/reduce.rs

//! Median reduction of a burst of distance samples.
//!
//! Single readings from an ultrasonic sensor pick up multipath echoes and the
//! odd wild value; taking the median of a short burst discards those without
//! pulling the result toward them the way a mean would.

use crate::common::timing::DEFAULT_BATCH_SIZE;
use arrayvec::ArrayVec;

/// Fixed-capacity batch of distance samples collected during one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch<const N: usize = DEFAULT_BATCH_SIZE> {
    samples: ArrayVec<f32, N>,
}

impl<const N: usize> SampleBatch<N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            samples: ArrayVec::new(),
        }
    }

    /// Appends a sample. Hands it back if the batch is already full.
    pub fn push(&mut self, sample: f32) -> Result<(), f32> {
        self.samples.try_push(sample).map_err(|e| e.element())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    /// Samples in arrival order.
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the batch and returns its median, `None` if it is empty.
    pub fn reduce(mut self) -> Option<f32> {
        middle_of(&mut self.samples)
    }
}

impl<const N: usize> Default for SampleBatch<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Median of `samples`.
///
/// Sorts its own copy and returns the middle element. For an even count this is
/// the lower of the two middle values; the two are never averaged, so the
/// result is always one of the inputs. `None` for an empty array.
pub fn median<const N: usize>(mut samples: [f32; N]) -> Option<f32> {
    middle_of(&mut samples)
}

fn middle_of(values: &mut [f32]) -> Option<f32> {
    let mid = values.len().checked_sub(1)? / 2;
    values.sort_unstable_by(f32::total_cmp);
    Some(values[mid])
}
