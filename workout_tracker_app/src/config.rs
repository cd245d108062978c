use workout_tracker_data_management::WORKOUTS_KEY;

pub const MAP_ZOOM_LEVEL: f64 = 15.;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid positive numbers!";
pub const LOCATION_FAILED_MESSAGE: &str = "Couldn't get your position!";
pub const NO_LOCATION_SELECTED_MESSAGE: &str = "Click on the map to choose where the workout took place!";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Zoom used when the map opens and when centering on a workout
    pub map_zoom_level: f64,
    /// Storage key of the workout blob
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_zoom_level: MAP_ZOOM_LEVEL,
            storage_key: WORKOUTS_KEY.to_owned(),
        }
    }
}
