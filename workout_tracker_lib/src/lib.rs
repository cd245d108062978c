pub mod coordinates;
pub mod validators;
pub mod workout;
