//! Workout model
//!
//! This module defines the workout variants and their metric formulas:
//! - Distance from raw step/stroke counts
//! - Mean speed over the session
//! - Variant-specific calorie expenditure
//!
//! Every variant shares the same base sensor fields (count, duration, weight)
//! and overrides only the formulas that differ for its movement type.

use crate::error::TrackerError;
use crate::summary::Summary;

/// Length of one step in meters (running and walking)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Length of one stroke in meters (swimming)
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Meters per kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
pub const MIN_IN_H: f64 = 60.0;

/// Trait for workout sessions.
///
/// Implementations provide the raw sensor accessors; distance, mean speed and
/// the summary come from the provided methods. The calorie formula is
/// variant-specific and has no base implementation: an impl that does not
/// override [`Workout::calories_kcal`] fails at call time.
pub trait Workout: std::fmt::Debug {
    /// Display name used verbatim in the summary line.
    fn type_name(&self) -> &'static str;

    /// Raw sensor count for the session (steps or strokes).
    fn action(&self) -> u32;

    /// Session duration in hours.
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Length of one step or stroke in meters.
    fn stride_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered over the session in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.stride_m() / M_IN_KM
    }

    /// Mean speed over the session in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned over the session in kcal.
    fn calories_kcal(&self) -> Result<f64, TrackerError> {
        Err(TrackerError::CaloriesNotImplemented(
            self.type_name().to_string(),
        ))
    }

    /// Build the display-ready summary for this session.
    fn summary(&self) -> Result<Summary, TrackerError> {
        Ok(Summary {
            workout: self.type_name().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal()?,
        })
    }
}

/// Running session
#[derive(Debug, Clone)]
pub struct Running {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for Running {
    fn type_name(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> Result<f64, TrackerError> {
        Ok(
            (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT)
                * self.weight_kg
                / M_IN_KM
                * self.duration_h
                * MIN_IN_H,
        )
    }
}

/// Sports walking session
#[derive(Debug, Clone)]
pub struct Walking {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl Walking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_WEIGHT_FACTOR: f64 = 0.029;
    const KMH_IN_MS: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for Walking {
    fn type_name(&self) -> &'static str {
        "Walking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn calories_kcal(&self) -> Result<f64, TrackerError> {
        // Mean speed enters the formula in m/s, height in meters
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MS;
        let height_m = self.height_cm / Self::CM_IN_M;

        Ok((Self::WEIGHT_FACTOR * self.weight_kg
            + speed_ms.powi(2) / height_m * Self::SPEED_WEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H)
    }
}

/// Swimming session
///
/// Swimming counts strokes instead of steps and derives mean speed from the
/// pool metrics rather than from stroke distance.
#[derive(Debug, Clone)]
pub struct Swimming {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    lap_count: f64,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            lap_count,
        }
    }
}

impl Workout for Swimming {
    fn type_name(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn stride_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.lap_count / M_IN_KM / self.duration_h
    }

    fn calories_kcal(&self) -> Result<f64, TrackerError> {
        Ok((self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_metrics() {
        let running = Running::new(15000, 1.0, 75.0);

        assert!((running.distance_km() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed_kmh() - 9.75).abs() < 1e-9);

        // (18.0 * 9.75 + 1.79) * 75 / 1000 * 1 * 60
        let calories = running.calories_kcal().unwrap();
        assert!((calories - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_walking_metrics() {
        let walking = Walking::new(9000, 1.0, 75.0, 180.0);

        assert!((walking.distance_km() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed_kmh() - 5.85).abs() < 1e-9);

        // (0.035*75 + (5.85*0.278)^2 / 1.8 * 0.029*75) * 1 * 60
        let calories = walking.calories_kcal().unwrap();
        assert!((calories - 349.252).abs() < 1e-3);
    }

    #[test]
    fn test_swimming_metrics() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);

        // Stroke length, not step length
        assert!((swimming.distance_km() - 0.9936).abs() < 1e-9);

        // Speed comes from pool metrics: 25 * 40 / 1000 / 1
        assert!((swimming.mean_speed_kmh() - 1.0).abs() < 1e-9);

        // (1.0 + 1.1) * 2.0 * 80 * 1
        let calories = swimming.calories_kcal().unwrap();
        assert!((calories - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_speed_scales_with_duration() {
        let swimming = Swimming::new(720, 2.0, 80.0, 25.0, 40.0);
        assert!((swimming.mean_speed_kmh() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_summary_fields() {
        let running = Running::new(15000, 1.0, 75.0);
        let summary = running.summary().unwrap();

        assert_eq!(summary.workout, "Running");
        assert!((summary.duration_h - 1.0).abs() < 1e-9);
        assert!((summary.distance_km - 9.75).abs() < 1e-9);
        assert!((summary.speed_kmh - 9.75).abs() < 1e-9);
        assert!((summary.calories_kcal - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);

        let first = swimming.summary().unwrap();
        let second = swimming.summary().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_calories_without_override_fails() {
        #[derive(Debug)]
        struct Rowing {
            action: u32,
            duration_h: f64,
            weight_kg: f64,
        }

        impl Workout for Rowing {
            fn type_name(&self) -> &'static str {
                "Rowing"
            }

            fn action(&self) -> u32 {
                self.action
            }

            fn duration_h(&self) -> f64 {
                self.duration_h
            }

            fn weight_kg(&self) -> f64 {
                self.weight_kg
            }
        }

        let rowing = Rowing {
            action: 500,
            duration_h: 0.5,
            weight_kg: 70.0,
        };

        // Distance still works off the default step length
        assert!((rowing.distance_km() - 0.325).abs() < 1e-9);

        let err = rowing.calories_kcal().unwrap_err();
        assert!(matches!(
            err,
            TrackerError::CaloriesNotImplemented(ref name) if name == "Rowing"
        ));

        // The summary cannot be built either
        assert!(rowing.summary().is_err());
    }
}
