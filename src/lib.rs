//! Fittrack - workout metrics engine for raw fitness sensor packets
//!
//! Fittrack turns raw sensor packets (a step or stroke count plus session
//! metadata) into display-ready workout summaries through a small
//! deterministic pipeline: packet dispatch → metric derivation → summary
//! formatting.
//!
//! ## Modules
//!
//! - **Workout Model**: per-variant distance, mean speed and calorie formulas
//! - **Dispatcher**: workout-type codes to concrete variants
//! - **Summary**: the computed record and its fixed-format renderer

pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod summary;
pub mod workout;

pub use dispatch::read_package;
pub use error::TrackerError;
pub use pipeline::{process_packages, summary_line};
pub use summary::{Summary, SummaryFormatter};
pub use workout::{Running, Swimming, Walking, Workout};
