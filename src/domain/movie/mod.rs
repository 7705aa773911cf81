pub mod entity;
pub mod invariants;

pub use entity::Movie;
pub use invariants::{validate_movie, MAX_RELEASE_YEAR, MIN_ENTITY_DURATION, MIN_RELEASE_YEAR};
