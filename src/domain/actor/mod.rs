pub mod entity;
pub mod invariants;

pub use entity::Actor;
pub use invariants::validate_actor;
