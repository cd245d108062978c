use workout_tracker_data_management::workout_store::WorkoutStore;
use workout_tracker_lib::coordinates::Coordinates;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting for the one position lookup made per session
    AwaitingLocation,
    /// The map is shown, centered on the user's position
    Ready { center: Coordinates },
    /// The lookup failed, there is no map but the list still works
    LocationUnavailable,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: Phase,
    /// Where the map was last clicked, the position a submitted form is recorded at
    pub pending_click: Option<Coordinates>,
    pub store: WorkoutStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            phase: Phase::AwaitingLocation,
            pending_click: None,
            store: WorkoutStore::new(),
            config,
        }
    }

    pub fn map_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
