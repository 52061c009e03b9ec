//! Workout summaries
//!
//! The display-ready summary record and its fixed-format renderer. Numeric
//! fields are rendered with exactly three decimal places; the workout name
//! passes through verbatim.

use serde::{Deserialize, Serialize};

/// Computed result of one workout session.
///
/// Produced once per workout by [`crate::workout::Workout::summary`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Display name of the workout variant
    pub workout: String,
    /// Session duration (hours)
    pub duration_h: f64,
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed (km/h)
    pub speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories_kcal: f64,
}

/// Renderer for the fixed summary line
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Render a summary as the fixed single-line report.
    pub fn format(summary: &Summary) -> String {
        format!(
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            summary.workout,
            summary.duration_h,
            summary.distance_km,
            summary.speed_kmh,
            summary.calories_kcal,
        )
    }
}
