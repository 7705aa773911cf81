//! Genre Invariants:
//!
//! 1. Genre name cannot be blank
//! 2. Name uniqueness is NOT enforced; duplicates are stored as-is
//! 3. The movies of a genre are derived from the movie side of the association

pub mod entity;

pub use entity::Genre;

use crate::domain::{DomainError, DomainResult};

/// Validates Genre invariants
pub fn validate_genre(genre: &Genre) -> DomainResult<()> {
    if genre.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Genre can not be blank".to_string(),
        ));
    }
    Ok(())
}
