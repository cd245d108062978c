use chrono::Utc;
use workout_tracker_data_management::{DataManager, storage::BlobStorage};
use workout_tracker_lib::{
    coordinates::Coordinates,
    workout::{WorkoutId, WorkoutType},
};

use crate::{
    config::AppConfig,
    event::{AppEvent, Effect},
    form::WorkoutForm,
    handlers,
    location::LocationProvider,
    render::Renderer,
    state::AppState,
    view::{ListEntry, MarkerPopup},
};

/// Owns the session: feeds events through the handlers and carries out the resulting effects
/// on the renderer and the storage.
pub struct App<R: Renderer, S: BlobStorage> {
    state: AppState,
    renderer: R,
    data_manager: DataManager<S>,
}

impl<R: Renderer, S: BlobStorage> App<R, S> {
    /// Reads the stored history, then asks for the user's position once.
    pub async fn start(config: AppConfig, renderer: R, storage: S, location: &impl LocationProvider) -> Self {
        let data_manager = DataManager::with_key(storage, config.storage_key.clone());

        let mut app = Self {
            state: AppState::new(config),
            renderer,
            data_manager,
        };

        let store = app.data_manager.load_store().await;
        app.dispatch(AppEvent::HistoryLoaded(store)).await;

        let position = location.current_position().await;
        app.dispatch(AppEvent::LocationResolved(position)).await;

        app
    }

    pub async fn dispatch(&mut self, event: AppEvent) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = handlers::handle(state, event);
        self.state = state;

        for effect in effects {
            self.apply(effect).await;
        }
    }

    pub async fn map_clicked(&mut self, coordinates: Coordinates) {
        self.dispatch(AppEvent::MapClicked(coordinates)).await;
    }

    pub async fn workout_type_changed(&mut self, workout_type: WorkoutType) {
        self.dispatch(AppEvent::WorkoutTypeChanged(workout_type)).await;
    }

    pub async fn submit_form(&mut self, form: WorkoutForm) {
        self.dispatch(AppEvent::FormSubmitted {
            form,
            submitted_at: Utc::now(),
        })
        .await;
    }

    pub async fn list_entry_clicked(&mut self, id: WorkoutId) {
        self.dispatch(AppEvent::ListEntryClicked(id)).await;
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn data_manager(&self) -> &DataManager<S> {
        &self.data_manager
    }

    async fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::InitMap { center, zoom } => self.renderer.init_map(center, zoom),
            Effect::RenderMarker(workout) => self.renderer.render_marker(MarkerPopup::for_workout(&workout)),
            Effect::RenderListEntry(workout) => self.renderer.render_list_entry(ListEntry::for_workout(&workout)),
            Effect::ShowForm => self.renderer.show_form(),
            Effect::HideForm => self.renderer.hide_form(),
            Effect::ShowFieldsFor(workout_type) => self.renderer.show_fields_for(workout_type),
            Effect::CenterMapOn { coordinates, zoom } => self.renderer.center_map_on(coordinates, zoom),
            Effect::Alert(message) => self.renderer.alert(&message),
            Effect::Persist => {
                // The session carries on with the in-memory store if this fails
                if let Err(err) = self.data_manager.save_store(&self.state.store).await {
                    tracing::error!("Failed to persist workouts: {err:?}");
                }
            }
        }
    }
}
