use workout_tracker_lib::{coordinates::Coordinates, workout::WorkoutType};

use crate::view::{ListEntry, MarkerPopup};

/// The map widget and the page around it.
pub trait Renderer {
    fn init_map(&mut self, center: Coordinates, zoom: f64);

    fn render_marker(&mut self, popup: MarkerPopup);

    fn render_list_entry(&mut self, entry: ListEntry);

    fn center_map_on(&mut self, coordinates: Coordinates, zoom: f64);

    fn show_form(&mut self);

    /// Also clears the inputs.
    fn hide_form(&mut self);

    fn show_fields_for(&mut self, workout_type: WorkoutType);

    /// A blocking message to the user.
    fn alert(&mut self, message: &str);
}
