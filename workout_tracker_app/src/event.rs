use chrono::{DateTime, Utc};
use workout_tracker_data_management::workout_store::WorkoutStore;
use workout_tracker_lib::{
    coordinates::Coordinates,
    workout::{Workout, WorkoutId, WorkoutType},
};

use crate::{form::WorkoutForm, location::LocationError};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The stored history was read at startup
    HistoryLoaded(WorkoutStore),
    LocationResolved(Result<Coordinates, LocationError>),
    MapClicked(Coordinates),
    WorkoutTypeChanged(WorkoutType),
    FormSubmitted {
        form: WorkoutForm,
        submitted_at: DateTime<Utc>,
    },
    ListEntryClicked(WorkoutId),
}

/// Side effects requested by a handler, carried out by the [`App`](crate::app::App).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    InitMap { center: Coordinates, zoom: f64 },
    RenderMarker(Workout),
    RenderListEntry(Workout),
    /// Open the form for a new workout at the clicked position
    ShowForm,
    /// Close the form and clear its inputs
    HideForm,
    /// Show the type specific input of the given type and hide the other
    ShowFieldsFor(WorkoutType),
    CenterMapOn { coordinates: Coordinates, zoom: f64 },
    Alert(String),
    /// Write the whole store to storage
    Persist,
}
