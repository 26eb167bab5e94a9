//! Counters for processed sensor packages.
//!
//! Nothing is exported unless the embedding binary installs a `metrics`
//! recorder; without one the macros are no-ops.

use crate::{Training, TrackerError, Workout};

pub const PACKAGES_TOTAL: &str = "fitness_tracker_packages_total";
pub const REJECTED_PACKAGES_TOTAL: &str = "fitness_tracker_rejected_packages_total";

pub fn record_package(workout: &Workout) {
    metrics::counter!(PACKAGES_TOTAL, "activity" => workout.kind().code()).increment(1);
}

pub fn record_rejection(error: &TrackerError) {
    metrics::counter!(REJECTED_PACKAGES_TOTAL, "reason" => error.reason()).increment(1);
}
