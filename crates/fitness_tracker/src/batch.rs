//! Sensor packages and batch processing.

use crate::{Report, Training, TrackerResult, dispatch};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// Raw readings for one training session.
///
/// Deserializes from either `{"workout_type": "RUN", "data": [...]}` or the
/// pair form `["RUN", [...]]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorPackage {
    /// Activity code: `SWM`, `RUN` or `WLK`.
    pub workout_type: String,
    /// Positional readings, starting with action count, duration and weight.
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

/// Accepted input shapes of a [`SensorPackage`].
#[derive(Deserialize, JsonSchema)]
#[serde(untagged)]
enum PackageRepr {
    Object {
        /// Activity code: `SWM`, `RUN` or `WLK` (also accepted as `code`).
        #[serde(alias = "code")]
        workout_type: String,
        /// Positional readings, starting with action count, duration and weight.
        data: Vec<f64>,
    },
    /// `[code, readings]`
    Pair(String, Vec<f64>),
}

impl JsonSchema for SensorPackage {
    fn schema_name() -> Cow<'static, str> {
        "SensorPackage".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        PackageRepr::json_schema(generator)
    }
}

impl<'de> Deserialize<'de> for SensorPackage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match PackageRepr::deserialize(deserializer)? {
            PackageRepr::Object { workout_type, data } | PackageRepr::Pair(workout_type, data) => {
                SensorPackage { workout_type, data }
            }
        })
    }
}

/// Dispatch one package and compute its report.
pub fn process_package(package: &SensorPackage) -> TrackerResult<Report> {
    let workout = dispatch::read_package(&package.workout_type, &package.data)?;
    Ok(workout.show_training_info())
}

/// Process packages independently; a failing package never affects the rest.
pub fn process_batch(packages: &[SensorPackage]) -> Vec<TrackerResult<Report>> {
    packages.iter().map(process_package).collect()
}

/// Sample readings covering every activity.
pub fn demo_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
