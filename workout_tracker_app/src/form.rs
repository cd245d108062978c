use std::fmt;

use chrono::{DateTime, Utc};
use workout_tracker_lib::{
    coordinates::Coordinates,
    validators::{are_input_fields_numeric, are_input_fields_positive, parse_input_field},
    workout::{Workout, WorkoutType},
};

use crate::config::{INVALID_INPUT_MESSAGE, NO_LOCATION_SELECTED_MESSAGE};

/// The raw contents of the workout form. Cadence is only read for running, elevation only for cycling.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutForm {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            workout_type: WorkoutType::Running,
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            elevation: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            workout_type: WorkoutType::Cycling,
            distance: distance.into(),
            duration: duration.into(),
            cadence: String::new(),
            elevation: elevation.into(),
        }
    }

    /// Validates the fields relevant to the chosen type and builds the workout.
    /// Nothing is constructed unless every check passes.
    pub fn to_workout(&self, coordinates: Coordinates, created_at: DateTime<Utc>) -> Result<Workout, InputError> {
        let distance = parse_input_field(&self.distance);
        let duration = parse_input_field(&self.duration);

        match self.workout_type {
            WorkoutType::Running => {
                let cadence = parse_input_field(&self.cadence);
                check(&[distance, duration, cadence], &[distance, duration, cadence])?;
                Ok(Workout::running_at(coordinates, distance, duration, cadence, created_at))
            }
            WorkoutType::Cycling => {
                // Elevation gain may be zero or negative
                let elevation = parse_input_field(&self.elevation);
                check(&[distance, duration, elevation], &[distance, duration])?;
                Ok(Workout::cycling_at(coordinates, distance, duration, elevation, created_at))
            }
        }
    }
}

fn check(numeric: &[f64], positive: &[f64]) -> Result<(), InputError> {
    if !are_input_fields_numeric(numeric) {
        return Err(InputError::NotNumeric);
    }
    if !are_input_fields_positive(positive) {
        return Err(InputError::NotPositive);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NoLocationSelected,
    NotNumeric,
    NotPositive,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoLocationSelected => f.write_str(NO_LOCATION_SELECTED_MESSAGE),
            InputError::NotNumeric | InputError::NotPositive => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}
