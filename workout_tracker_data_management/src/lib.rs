use const_format::concatcp;
use workout_tracker_lib::workout::WorkoutId;

pub mod storage;
pub mod workout_store;
mod data_manager;
mod logging;

pub use data_manager::*;
pub use logging::init_logging;

pub const DATA_DIR: &str = "data/";
pub const BLOB_DIR: &str = concatcp!(DATA_DIR, "blobs");
pub const WORKOUTS_KEY: &str = "workouts";
pub const BLOB_FILE_EXTENSION: &str = "json";

#[derive(Debug)]
pub enum DataManagerError {
    Storage(String),
    Serialization(String),
    DuplicateWorkout(WorkoutId),
}
