use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinates::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// 8 random bytes, hex encoded.
    pub fn generate() -> Self {
        let random_bytes: [u8; 8] = rand::random();
        Self(hex::encode(random_bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// The discriminant as it appears in storage and in css class names.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn list_icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    pub fn marker_icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃",
            WorkoutType::Cycling => "🚴‍",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            _ => Err("Unknown workout type"),
        }
    }
}

/// The type specific part of a workout, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometer
        #[serde(deserialize_with = "derived_metric")]
        pace: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cycling {
        /// Meters, may be zero or negative
        elevation_gain: f64,
        /// Kilometers per hour
        #[serde(deserialize_with = "derived_metric")]
        speed: f64,
    },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// serde_json writes non-finite floats as `null`, read those back as NaN.
fn derived_metric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A recorded workout. Built once through [`Workout::running`] or [`Workout::cycling`]
/// and read-only afterwards.
///
/// Inputs are expected to be validated by the caller, see [`crate::validators`].
/// A zero distance gives an infinite or NaN derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: WorkoutId,
    coordinates: Coordinates,
    /// Kilometers
    distance: f64,
    /// Minutes
    duration: f64,
    created_at: DateTime<Utc>,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    pub fn running(coordinates: Coordinates, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running_at(coordinates, distance, duration, cadence, Utc::now())
    }

    pub fn running_at(coordinates: Coordinates, distance: f64, duration: f64, cadence: f64, created_at: DateTime<Utc>) -> Self {
        let pace = duration / distance;
        Self::new(coordinates, distance, duration, created_at, WorkoutKind::Running { cadence, pace })
    }

    pub fn cycling(coordinates: Coordinates, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self::cycling_at(coordinates, distance, duration, elevation_gain, Utc::now())
    }

    pub fn cycling_at(coordinates: Coordinates, distance: f64, duration: f64, elevation_gain: f64, created_at: DateTime<Utc>) -> Self {
        let speed = distance / (duration / 60.);
        Self::new(coordinates, distance, duration, created_at, WorkoutKind::Cycling { elevation_gain, speed })
    }

    fn new(coordinates: Coordinates, distance: f64, duration: f64, created_at: DateTime<Utc>, kind: WorkoutKind) -> Self {
        // e.g. "Running on April 14"
        let description = format!("{} on {}", kind.workout_type().name(), created_at.format("%B %-d"));

        Self {
            id: WorkoutId::generate(),
            coordinates,
            distance,
            duration,
            created_at,
            description,
            kind,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Some(pace),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed, .. } => Some(speed),
            WorkoutKind::Running { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn berlin() -> Coordinates {
        Coordinates::new(52.52, 13.405)
    }

    #[test]
    fn running_pace() {
        let workout = Workout::running(berlin(), 5., 30., 150.);
        assert_eq!(workout.pace(), Some(6.));
        assert_eq!(workout.speed(), None);
        assert_eq!(workout.workout_type(), WorkoutType::Running);
    }

    #[test]
    fn cycling_speed() {
        let workout = Workout::cycling(berlin(), 20., 60., 300.);
        assert_eq!(workout.speed(), Some(20.));
        assert_eq!(workout.pace(), None);
        assert_eq!(workout.workout_type(), WorkoutType::Cycling);
    }

    #[test]
    fn derived_metrics_follow_formulas() {
        for (distance, duration) in [(0.4, 3.5), (12.75, 61.), (42.195, 185.3), (1e-3, 1e-2)] {
            let running = Workout::running(berlin(), distance, duration, 170.);
            let cycling = Workout::cycling(berlin(), distance, duration, -12.);
            assert_eq!(running.pace(), Some(duration / distance));
            assert_eq!(cycling.speed(), Some(distance / (duration / 60.)));
        }
    }

    #[test]
    fn zero_distance_is_not_guarded() {
        let workout = Workout::running(berlin(), 0., 30., 150.);
        assert!(workout.pace().unwrap().is_infinite());

        let workout = Workout::cycling(berlin(), 0., 0., 0.);
        assert!(workout.speed().unwrap().is_nan());
    }

    #[test]
    fn description_uses_creation_date() {
        let created_at = Utc.with_ymd_and_hms(2024, 4, 4, 8, 30, 0).unwrap();
        let workout = Workout::running_at(berlin(), 5., 30., 150., created_at);
        assert_eq!(workout.description(), "Running on April 4");
        assert_eq!(workout.created_at(), created_at);

        let created_at = Utc.with_ymd_and_hms(2023, 12, 24, 18, 0, 0).unwrap();
        let workout = Workout::cycling_at(berlin(), 20., 60., 300., created_at);
        assert_eq!(workout.description(), "Cycling on December 24");
    }

    #[test]
    fn ids_are_fresh() {
        let a = Workout::running(berlin(), 5., 30., 150.);
        let b = Workout::running(berlin(), 5., 30., 150.);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().as_str().len(), 16);
    }

    #[test]
    fn serialized_record_carries_all_fields() {
        let created_at = Utc.with_ymd_and_hms(2024, 4, 14, 10, 0, 0).unwrap();
        let workout = Workout::cycling_at(berlin(), 20., 60., 300., created_at);
        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["id"], json!(workout.id().as_str()));
        assert_eq!(value["coordinates"], json!([52.52, 13.405]));
        assert_eq!(value["distance"], json!(20.));
        assert_eq!(value["duration"], json!(60.));
        assert_eq!(value["createdAt"], json!("2024-04-14T10:00:00Z"));
        assert_eq!(value["description"], json!("Cycling on April 14"));
        assert_eq!(value["type"], json!("cycling"));
        assert_eq!(value["elevationGain"], json!(300.));
        assert_eq!(value["speed"], json!(20.));
    }

    #[test]
    fn stored_derived_metric_is_taken_verbatim() {
        let record = json!({
            "id": "abc",
            "coordinates": [52.52, 13.405],
            "distance": 5.0,
            "duration": 30.0,
            "createdAt": "2024-04-14T10:00:00Z",
            "description": "Running on April 14",
            "type": "running",
            "cadence": 150.0,
            "pace": 7.5
        });

        let workout: Workout = serde_json::from_value(record).unwrap();
        assert_eq!(workout.id(), &WorkoutId::from("abc"));
        assert_eq!(workout.pace(), Some(7.5));
        assert_eq!(workout.kind(), &WorkoutKind::Running { cadence: 150., pace: 7.5 });
    }

    #[test]
    fn non_finite_metric_survives_storage() {
        let workout = Workout::running(berlin(), 0., 30., 150.);
        let text = serde_json::to_string(&workout).unwrap();
        let restored: Workout = serde_json::from_str(&text).unwrap();
        assert!(restored.pace().unwrap().is_nan());
    }

    #[test]
    fn workout_type_from_form_value() {
        assert_eq!("running".parse::<WorkoutType>(), Ok(WorkoutType::Running));
        assert_eq!("cycling".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
        assert!("swimming".parse::<WorkoutType>().is_err());
        assert_eq!(WorkoutType::Cycling.tag(), "cycling");
    }
}
