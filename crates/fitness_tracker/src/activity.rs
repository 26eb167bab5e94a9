//! Activity variants and their formulas.

use crate::Training;

/// Metres per kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes per hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length in metres for land activities.
pub const LEN_STEP: f64 = 0.65;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::Walking,
    ];

    /// Sensor package code.
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Name shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Running {
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance(&self) -> f64 {
        f64::from(self.action_count) * LEN_STEP / M_IN_KM
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * (self.duration_hours * MIN_IN_H)
    }
}

/// Sports walking.
#[derive(Clone, Debug, PartialEq)]
pub struct Walking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Walking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for Walking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance(&self) -> f64 {
        f64::from(self.action_count) * LEN_STEP / M_IN_KM
    }

    fn spent_calories(&self) -> f64 {
        // speed² / height keeps only its integer part before the multiplier
        let speed_height_ratio = (self.mean_speed().powi(2) / self.height_cm).floor();
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * (self.duration_hours * MIN_IN_H)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: f64,
}

impl Swimming {
    /// Stroke length in metres.
    pub const LEN_STROKE: f64 = 1.38;
    pub const CALORIES_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn distance(&self) -> f64 {
        f64::from(self.action_count) * Self::LEN_STROKE / M_IN_KM
    }

    /// Pool geometry, not stroke count, determines swimming speed.
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_laps / M_IN_KM / self.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
    }
}

/// A dispatched activity of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Walking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn duration_hours(&self) -> f64 {
        self.as_training().duration_hours()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<Walking> for Workout {
    fn from(t: Walking) -> Self {
        Workout::Walking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn running_metrics() {
        let run = Running::new(15000, 1.0, 75.0);
        assert_close(run.distance(), 9.75);
        assert_close(run.mean_speed(), 9.75);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert_close(run.spent_calories(), 699.75);
    }

    #[test]
    fn running_distance_scales_with_steps() {
        for steps in [0, 1, 1000, 12345, 40000] {
            let run = Running::new(steps, 2.5, 60.0);
            assert_close(run.distance(), f64::from(steps) * 0.00065);
        }
    }

    #[test]
    fn mean_speed_divides_by_duration() {
        let run = Running::new(10000, 0.5, 70.0);
        assert_close(run.mean_speed(), 13.0);
    }

    #[test]
    fn walking_floors_speed_height_ratio() {
        let walk = Walking::new(9000, 1.0, 75.0, 180.0);
        assert_close(walk.mean_speed(), 5.85);
        // 5.85² / 180 ≈ 0.19 floors to 0, leaving only the weight term
        assert_close(walk.spent_calories(), 0.035 * 75.0 * 60.0);
    }

    #[test]
    fn walking_keeps_whole_part_of_ratio() {
        // 19.5 km/h over 180 cm: 380.25 / 180 = 2.1125 -> 2
        let walk = Walking::new(30000, 1.0, 80.0, 180.0);
        assert_close(walk.mean_speed(), 19.5);
        let expected = (0.035 * 80.0 + 2.0 * 0.029 * 80.0) * 60.0;
        assert_close(walk.spent_calories(), expected);
    }

    #[test]
    fn swimming_speed_uses_pool_geometry() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        assert_close(swim.mean_speed(), 1.0);
        assert_close(swim.spent_calories(), 336.0);
        // stroke distance is independent of the pool-based speed
        assert_close(swim.distance(), 0.9936);
        assert!((swim.distance() / swim.duration_hours() - swim.mean_speed()).abs() > 1e-3);
    }

    #[test]
    fn zero_duration_is_not_an_error() {
        let run = Running::new(1000, 0.0, 70.0);
        assert!(run.mean_speed().is_infinite());
    }

    #[test]
    fn workout_delegates_to_variant() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40.0);
        let workout = Workout::from(swim.clone());
        assert_eq!(workout.kind(), ActivityKind::Swimming);
        assert_close(workout.mean_speed(), swim.mean_speed());
        assert_close(workout.spent_calories(), swim.spent_calories());
    }

    #[test]
    fn kinds_round_trip_through_codes() {
        for kind in ActivityKind::ALL {
            assert_eq!(ActivityKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ActivityKind::from_code("BIKE"), None);
        assert_eq!(ActivityKind::from_code("run"), None);
    }
}
