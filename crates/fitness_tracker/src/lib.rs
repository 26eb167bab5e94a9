//! Fitness tracker calculator: turns raw sensor packages into training reports.
//!
//! A package is an activity code (`"RUN"`, `"WLK"`, `"SWM"`) plus positional
//! sensor readings. The [`dispatch`] table validates it and builds a
//! [`Workout`], the [`Training`] trait computes its metrics and
//! [`Report`] renders the summary line.

use thiserror::Error;

pub mod activity;
pub mod batch;
pub mod config;
pub mod dispatch;
pub mod observability;
pub mod report;

pub use activity::{ActivityKind, Running, Swimming, Walking, Workout};
pub use batch::{SensorPackage, demo_packages, process_batch, process_package};
pub use config::{Config, OutputFormat};
pub use dispatch::read_package;
pub use report::Report;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown activity code: {0:?}")]
    UnknownActivityCode(String),
    #[error("activity {code} expects {expected} data values, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("action count must be a non-negative integer, got {0}")]
    InvalidActionCount(f64),
    #[error("configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Short machine-readable tag, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            TrackerError::UnknownActivityCode(_) => "unknown_activity_code",
            TrackerError::ArityMismatch { .. } => "arity_mismatch",
            TrackerError::InvalidActionCount(_) => "invalid_action_count",
            TrackerError::Config(_) => "config",
        }
    }
}

/// Result type alias for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Metrics every activity exposes.
///
/// Implementors supply their distance and calorie formulas; mean speed
/// defaults to distance over duration and may be overridden when an
/// activity measures speed differently.
pub trait Training {
    fn kind(&self) -> ActivityKind;

    fn duration_hours(&self) -> f64;

    /// Covered distance in kilometres.
    fn distance(&self) -> f64;

    /// Average speed over the whole session in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration_hours()
    }

    /// Energy expenditure estimate in kcal.
    fn spent_calories(&self) -> f64;

    /// Snapshot the computed metrics into a [`Report`].
    fn show_training_info(&self) -> Report {
        let report = Report::new(
            self.kind().label(),
            self.duration_hours(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        );
        tracing::trace!(
            activity = %report.activity_label,
            distance_km = report.distance_km,
            mean_speed_kmh = report.mean_speed_kmh,
            calories_kcal = report.calories_kcal,
            "computed training metrics"
        );
        report
    }
}
