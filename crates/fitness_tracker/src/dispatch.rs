//! Maps sensor package codes to activity constructors.
//!
//! Each entry of [`DISPATCH_TABLE`] pairs an activity kind with the number of
//! positional values it expects and the function building it. Lookups and
//! arity checks happen before any constructor runs, so a constructor can
//! index its slice freely.

use crate::activity::{ActivityKind, Running, Swimming, Walking, Workout};
use crate::{TrackerError, TrackerResult, observability};

pub struct DispatchEntry {
    pub kind: ActivityKind,
    /// Expected number of positional data values.
    pub arity: usize,
    build: fn(u32, &[f64]) -> Workout,
}

pub const DISPATCH_TABLE: &[DispatchEntry] = &[
    DispatchEntry {
        kind: ActivityKind::Swimming,
        arity: 5,
        build: |action, data| Swimming::new(action, data[1], data[2], data[3], data[4]).into(),
    },
    DispatchEntry {
        kind: ActivityKind::Running,
        arity: 3,
        build: |action, data| Running::new(action, data[1], data[2]).into(),
    },
    DispatchEntry {
        kind: ActivityKind::Walking,
        arity: 4,
        build: |action, data| Walking::new(action, data[1], data[2], data[3]).into(),
    },
];

/// Look up the table entry for an activity code.
pub fn lookup(code: &str) -> TrackerResult<&'static DispatchEntry> {
    DISPATCH_TABLE
        .iter()
        .find(|entry| entry.kind.code() == code)
        .ok_or_else(|| TrackerError::UnknownActivityCode(code.to_string()))
}

/// Build the activity described by a sensor package.
///
/// `data` holds the positional readings: action count, duration (h) and
/// weight (kg), followed by height (cm) for walking or pool length (m) and
/// lap count for swimming.
pub fn read_package(code: &str, data: &[f64]) -> TrackerResult<Workout> {
    let result = build_workout(code, data);
    match &result {
        Ok(workout) => {
            tracing::debug!(code, values = data.len(), "dispatched sensor package");
            observability::record_package(workout);
        }
        Err(e) => {
            tracing::debug!(code, error = %e, "rejected sensor package");
            observability::record_rejection(e);
        }
    }
    result
}

fn build_workout(code: &str, data: &[f64]) -> TrackerResult<Workout> {
    let entry = lookup(code)?;
    if data.len() != entry.arity {
        return Err(TrackerError::ArityMismatch {
            code: entry.kind.code(),
            expected: entry.arity,
            actual: data.len(),
        });
    }
    let action = action_count(data[0])?;
    Ok((entry.build)(action, data))
}

fn action_count(value: f64) -> TrackerResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrackerError::InvalidActionCount(value))
    }
}
