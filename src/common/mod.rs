// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From config.rs
pub use config::MeasurementConfig;

// From error.rs
pub use error::EchoError;

// From hal_traits.rs
pub use hal_traits::{EdgeEventSource, EdgePoll, MonotonicClock};

// From types.rs
pub use types::{DistanceUnit, Edge, EdgeEvent, Timestamp};

// From timing.rs (constants - users can access via common::timing::*)
pub use timing::DEFAULT_BATCH_SIZE;
