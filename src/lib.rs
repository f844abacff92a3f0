// src/lib.rs

#![cfg_attr(not(any(test, feature = "std")), no_std)] // no_std unless std is requested

mod fmt; // <-- must be first module!

pub mod common;
pub mod echo;
pub mod reduce;
pub mod report;

#[cfg(feature = "rppal")]
pub mod linux;

// Re-export key types for convenience
pub use common::{DistanceUnit, EchoError, EdgeEvent, MeasurementConfig, Timestamp};
pub use echo::{EchoSensor, EdgeTimer, TriggerPulse};
pub use reduce::{median, SampleBatch};
pub use report::DepthReport;
