// src/bin/sump_monitor.rs
//
// Takes one median depth reading from an HC-SR04 on GPIO23 (trigger) and
// GPIO24 (echo) and prints it as a JSON record. Set RUST_LOG=debug to see the
// individual samples.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use sump_monitor::common::MeasurementConfig;
use sump_monitor::linux::{self, exit_code, RunError};
use sump_monitor::report::{DepthReport, DEFAULT_SENSOR_NAME};

const TRIGGER_LINE: &str = "GPIO23";
const ECHO_LINE: &str = "GPIO24";

/// About 30 s of missed pulses at the 60 ms cycle before giving up.
const MAX_CONSECUTIVE_TIMEOUTS: u32 = 500;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), RunError> {
    let config = MeasurementConfig::default().with_max_consecutive_timeouts(MAX_CONSECUTIVE_TIMEOUTS);
    let mut sensor = linux::open_sensor(TRIGGER_LINE, ECHO_LINE, config)?;

    let depth = sensor.measure()?;
    // Lines go back to the kernel before anything is printed.
    drop(sensor);

    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    println!("{}", DepthReport::new(t, depth, DEFAULT_SENSOR_NAME));
    Ok(())
}
