//! What the map and the list show for a workout. Rendering matches on the workout kind.

use workout_tracker_lib::{
    coordinates::Coordinates,
    workout::{Workout, WorkoutId, WorkoutKind},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub coordinates: Coordinates,
    /// `running-popup` or `cycling-popup`
    pub class_name: String,
    pub content: String,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();
        Self {
            coordinates: workout.coordinates(),
            class_name: format!("{}-popup", workout_type.tag()),
            content: format!("{} {}", workout_type.marker_icon(), workout.description()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Handed back in `ListEntryClicked`
    pub id: WorkoutId,
    pub class_name: String,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    pub fn for_workout(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();

        let mut details = vec![
            Detail::new(workout_type.list_icon(), workout.distance().to_string(), "km"),
            Detail::new("⏱", workout.duration().to_string(), "min"),
        ];

        match workout.kind() {
            WorkoutKind::Running { cadence, pace } => {
                details.push(Detail::new("⚡️", format!("{pace:.1}"), "min/km"));
                details.push(Detail::new("🦶🏼", cadence.to_string(), "spm"));
            }
            WorkoutKind::Cycling { elevation_gain, speed } => {
                details.push(Detail::new("⚡️", format!("{speed:.1}"), "km/h"));
                details.push(Detail::new("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().clone(),
            class_name: format!("workout workout--{}", workout_type.tag()),
            title: workout.description().to_owned(),
            details,
        }
    }
}
