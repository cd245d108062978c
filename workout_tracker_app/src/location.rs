use workout_tracker_lib::coordinates::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    Unsupported,
    PermissionDenied,
    Unavailable(String),
}

/// Source of the user's current position, asked once when the app starts.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Always answers with the same position, or the same failure.
#[derive(Debug, Clone)]
pub struct FixedLocation(pub Result<Coordinates, LocationError>);

impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.0.clone()
    }
}
