//! Sensor packet dispatch
//!
//! This module maps the workout-type code carried by a sensor packet to the
//! matching workout variant. The payload is positional: values are assigned
//! to the variant's fields in declaration order, and the payload length is
//! checked against the variant's field count before construction.

use crate::error::TrackerError;
use crate::workout::{Running, Swimming, Walking, Workout};

/// Packet code for running sessions
pub const CODE_RUNNING: &str = "RUN";
/// Packet code for sports walking sessions
pub const CODE_WALKING: &str = "WLK";
/// Packet code for swimming sessions
pub const CODE_SWIMMING: &str = "SWM";

/// Construct a workout from a sensor packet.
///
/// The payload carries the base fields (count, duration in hours, weight in
/// kg) followed by the variant-specific ones: height in cm for walking, pool
/// length in meters and lap count for swimming.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Workout>, TrackerError> {
    match code {
        CODE_RUNNING => {
            expect_arity(code, data, 3)?;
            Ok(Box::new(Running::new(data[0] as u32, data[1], data[2])))
        }
        CODE_WALKING => {
            expect_arity(code, data, 4)?;
            Ok(Box::new(Walking::new(
                data[0] as u32,
                data[1],
                data[2],
                data[3],
            )))
        }
        CODE_SWIMMING => {
            expect_arity(code, data, 5)?;
            Ok(Box::new(Swimming::new(
                data[0] as u32,
                data[1],
                data[2],
                data[3],
                data[4],
            )))
        }
        _ => Err(TrackerError::UnsupportedWorkoutType(code.to_string())),
    }
}

fn expect_arity(code: &str, data: &[f64], expected: usize) -> Result<(), TrackerError> {
    if data.len() != expected {
        return Err(TrackerError::PacketArity {
            workout: code.to_string(),
            expected,
            got: data.len(),
        });
    }
    Ok(())
}
