use chrono::{DateTime, Utc};
use workout_tracker_data_management::workout_store::WorkoutStore;
use workout_tracker_lib::{
    coordinates::Coordinates,
    workout::{WorkoutId, WorkoutType},
};

use crate::{
    config::LOCATION_FAILED_MESSAGE,
    event::{AppEvent, Effect},
    form::{InputError, WorkoutForm},
    location::LocationError,
    state::{AppState, Phase},
};

/// Runs one event against the state, returning the new state and the effects to carry out in order.
pub fn handle(state: AppState, event: AppEvent) -> (AppState, Vec<Effect>) {
    match event {
        AppEvent::HistoryLoaded(store) => history_loaded(state, store),
        AppEvent::LocationResolved(result) => location_resolved(state, result),
        AppEvent::MapClicked(coordinates) => map_clicked(state, coordinates),
        AppEvent::WorkoutTypeChanged(workout_type) => workout_type_changed(state, workout_type),
        AppEvent::FormSubmitted { form, submitted_at } => form_submitted(state, form, submitted_at),
        AppEvent::ListEntryClicked(id) => list_entry_clicked(state, id),
    }
}

fn history_loaded(mut state: AppState, store: WorkoutStore) -> (AppState, Vec<Effect>) {
    let mut effects: Vec<Effect> = store.iter().cloned().map(Effect::RenderListEntry).collect();

    // Only the case if the map came up before the history was read
    if state.map_ready() {
        effects.extend(store.iter().cloned().map(Effect::RenderMarker));
    }

    state.store = store;
    (state, effects)
}

fn location_resolved(mut state: AppState, result: Result<Coordinates, LocationError>) -> (AppState, Vec<Effect>) {
    if state.phase != Phase::AwaitingLocation {
        tracing::warn!("Ignoring position update, the location was already resolved");
        return (state, Vec::new());
    }

    match result {
        Ok(center) => {
            tracing::info!("Loading map at {}, {}", center.latitude, center.longitude);
            state.phase = Phase::Ready { center };

            let mut effects = vec![Effect::InitMap { center, zoom: state.config.map_zoom_level }];
            effects.extend(state.store.iter().cloned().map(Effect::RenderMarker));
            (state, effects)
        }
        Err(err) => {
            tracing::error!("Failed to get position: {err:?}");
            state.phase = Phase::LocationUnavailable;
            (state, vec![Effect::Alert(LOCATION_FAILED_MESSAGE.to_owned())])
        }
    }
}

fn map_clicked(mut state: AppState, coordinates: Coordinates) -> (AppState, Vec<Effect>) {
    if !state.map_ready() {
        tracing::debug!("Map click without a map");
        return (state, Vec::new());
    }

    state.pending_click = Some(coordinates);
    (state, vec![Effect::ShowForm])
}

/// The submitted form carries its own type, the state keeps no copy of the selector.
fn workout_type_changed(state: AppState, workout_type: WorkoutType) -> (AppState, Vec<Effect>) {
    (state, vec![Effect::ShowFieldsFor(workout_type)])
}

fn form_submitted(mut state: AppState, form: WorkoutForm, submitted_at: DateTime<Utc>) -> (AppState, Vec<Effect>) {
    let workout = state
        .pending_click
        .ok_or(InputError::NoLocationSelected)
        .and_then(|coordinates| form.to_workout(coordinates, submitted_at));

    let workout = match workout {
        Ok(workout) => workout,
        Err(err) => {
            tracing::debug!("Rejected workout form: {err:?}");
            return (state, vec![Effect::Alert(err.to_string())]);
        }
    };

    if let Err(err) = state.store.add(workout.clone()) {
        tracing::error!("Failed to add workout: {err:?}");
        return (state, Vec::new());
    }

    tracing::info!("New workout {} ({})", workout.id(), workout.description());
    state.pending_click = None;

    let effects = vec![
        Effect::RenderMarker(workout.clone()),
        Effect::RenderListEntry(workout),
        Effect::HideForm,
        Effect::Persist,
    ];
    (state, effects)
}

fn list_entry_clicked(state: AppState, id: WorkoutId) -> (AppState, Vec<Effect>) {
    let Some(coordinates) = state.store.find_by_id(&id).map(|workout| workout.coordinates()) else {
        tracing::warn!("No workout with id {id}");
        return (state, Vec::new());
    };

    if !state.map_ready() {
        return (state, Vec::new());
    }

    let effects = vec![Effect::CenterMapOn {
        coordinates,
        zoom: state.config.map_zoom_level,
    }];
    (state, effects)
}
