//! Error types for Fittrack

use thiserror::Error;

/// Errors that can occur during computation
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Workout type {0} is not supported")]
    UnsupportedWorkoutType(String),

    #[error("Calorie computation is not implemented for {0}")]
    CaloriesNotImplemented(String),

    #[error("Packet for {workout} carries {got} values, expected {expected}")]
    PacketArity {
        workout: String,
        expected: usize,
        got: usize,
    },
}
