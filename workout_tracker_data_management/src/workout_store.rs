use std::collections::HashSet;

use workout_tracker_lib::workout::{Workout, WorkoutId};

use crate::DataManagerError;

/// The ordered workouts of a session. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the workout. Ids are unique within a store, so a repeated id is rejected and the store is left as is.
    pub fn add(&mut self, workout: Workout) -> Result<(), DataManagerError> {
        if self.find_by_id(workout.id()).is_some() {
            return Err(DataManagerError::DuplicateWorkout(workout.id().clone()));
        }

        tracing::debug!("Adding workout {} ({})", workout.id(), workout.description());
        self.workouts.push(workout);
        Ok(())
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// The whole sequence as one JSON array, derived metrics included.
    pub fn serialize(&self) -> Result<String, DataManagerError> {
        serde_json::to_string(&self.workouts)
            .map_err(|err| DataManagerError::Serialization(format!("Failed to serialize workouts: {err}")))
    }

    /// Parses a blob written by [`WorkoutStore::serialize`]. Records are taken verbatim, derived metrics are not recomputed.
    ///
    /// A missing or corrupt blob means there is no history, so it gives an empty store.
    pub fn restore(blob: Option<&str>) -> Self {
        let Some(blob) = blob else {
            tracing::debug!("No stored workouts");
            return Self::new();
        };

        let workouts = match serde_json::from_str::<Vec<Workout>>(blob) {
            Ok(workouts) => workouts,
            Err(err) => {
                tracing::warn!("Discarding corrupt workout blob: {err}");
                return Self::new();
            }
        };

        let mut seen = HashSet::new();
        let workouts: Vec<Workout> = workouts
            .into_iter()
            .filter(|workout| {
                let fresh = seen.insert(workout.id().clone());
                if !fresh {
                    tracing::warn!("Dropping stored workout with repeated id {}", workout.id());
                }
                fresh
            })
            .collect();

        tracing::info!("Restored {} workouts", workouts.len());
        Self { workouts }
    }
}

impl<'a> IntoIterator for &'a WorkoutStore {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.workouts.iter()
    }
}
