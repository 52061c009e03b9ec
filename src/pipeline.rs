//! Pipeline orchestration
//!
//! This module provides the public API for Fittrack. It chains the stages for
//! one sensor packet:
//!
//! 1. Dispatch - map the packet code to a workout variant
//! 2. Workout model - derive distance, mean speed and calories
//! 3. Formatter - render the fixed summary line

use crate::dispatch::read_package;
use crate::error::TrackerError;
use crate::summary::SummaryFormatter;

/// Compute the summary line for a single sensor packet.
///
/// # Example
/// ```
/// let line = fittrack::summary_line("RUN", &[15000.0, 1.0, 75.0])?;
/// assert!(line.starts_with("Тип тренировки: Running;"));
/// # Ok::<(), fittrack::TrackerError>(())
/// ```
pub fn summary_line(code: &str, data: &[f64]) -> Result<String, TrackerError> {
    let workout = read_package(code, data)?;
    let summary = workout.summary()?;
    Ok(SummaryFormatter::format(&summary))
}

/// Compute summary lines for a batch of packets, in input order.
///
/// Both error kinds are fatal to the computation, so the first failing packet
/// aborts the batch.
pub fn process_packages(packages: &[(&str, &[f64])]) -> Result<Vec<String>, TrackerError> {
    packages
        .iter()
        .map(|&(code, data)| summary_line(code, data))
        .collect()
}
