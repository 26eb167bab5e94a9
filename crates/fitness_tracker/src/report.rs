use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Decimal places kept in every reported metric.
pub const PRECISION: usize = 3;

/// Computed metrics of a single training session.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct Report {
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Report {
    /// Build a report, rounding every metric to [`PRECISION`] decimals.
    pub fn new(
        activity_label: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            activity_label: activity_label.into(),
            duration_hours: round_to_precision(duration_hours),
            distance_km: round_to_precision(distance_km),
            mean_speed_kmh: round_to_precision(mean_speed_kmh),
            calories_kcal: round_to_precision(calories_kcal),
        }
    }

    /// Human-readable summary line.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Round through the decimal expansion of the stored binary value, so a
/// number stored just below a `.0005` boundary rounds down like `{:.3}` does.
fn round_to_precision(value: f64) -> f64 {
    format!("{value:.prec$}", prec = PRECISION).parse().unwrap_or(value)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity type: {}; Duration: {:.prec$} h; Distance: {:.prec$} km; \
             Avg speed: {:.prec$} km/h; Calories burned: {:.prec$}.",
            self.activity_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
            prec = PRECISION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_pads_to_three_decimals() {
        let report = Report::new("Running", 1.0, 9.75, 9.75, 10.0);
        assert_eq!(
            report.message(),
            "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 10.000."
        );
    }

    #[test]
    fn message_rounds_long_fractions() {
        let report = Report::new("Swimming", 0.5, 0.9936, 2.0 / 3.0, 1234567.89);
        assert_eq!(
            report.message(),
            "Activity type: Swimming; Duration: 0.500 h; Distance: 0.994 km; \
             Avg speed: 0.667 km/h; Calories burned: 1234567.890."
        );
    }

    #[test]
    fn tiny_and_huge_values_stay_fixed_point() {
        let report = Report::new("Running", 1e-7, 1e12, 0.0, 0.0004);
        let msg = report.message();
        assert!(msg.contains("Duration: 0.000 h"));
        assert!(msg.contains("Distance: 1000000000000.000 km"));
        assert!(msg.contains("Calories burned: 0.000."));
    }

    #[test]
    fn values_just_below_a_half_round_down() {
        // each literal is stored slightly below its trailing 5
        for (value, expected) in [
            (0.0065, "0.006"),
            (0.0195, "0.019"),
            (1.0005, "1.000"),
            (2.0675, "2.067"),
        ] {
            let report = Report::new("Running", value, value, value, value);
            let msg = report.message();
            assert!(msg.contains(&format!("Duration: {expected} h")), "{msg}");
            assert!(msg.contains(&format!("Distance: {expected} km")), "{msg}");
            assert_eq!(format!("{:.3}", report.calories_kcal), expected);
        }
    }

    #[test]
    fn huge_values_do_not_overflow_to_infinity() {
        let report = Report::new("Running", 1.0, 1e306, -1e306, f64::MAX);
        let msg = report.message();
        assert!(!msg.contains("inf"), "{msg}");
        assert_eq!(report.distance_km, 1e306);
        assert_eq!(report.calories_kcal, f64::MAX);
    }

    #[test]
    fn non_finite_values_pass_through() {
        let report = Report::new("Running", 0.0, 1.0, f64::INFINITY, f64::NAN);
        assert!(report.mean_speed_kmh.is_infinite());
        assert!(report.calories_kcal.is_nan());
    }

    #[test]
    fn stored_metrics_are_rounded() {
        let report = Report::new("SportsWalking", 1.0, 5.8500000001, 5.85, 157.49999);
        assert_eq!(report.distance_km, 5.85);
        assert_eq!(report.calories_kcal, 157.5);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let report = Report::new("Running", 1.0, 9.75, 9.75, 699.75);
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["activity_label"], "Running");
        assert_eq!(value["calories_kcal"], 699.75);
    }
}
