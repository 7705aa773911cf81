// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod genre;
pub mod movie;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain (owning side of both associations)
pub use movie::{validate_movie, Movie, MAX_RELEASE_YEAR, MIN_ENTITY_DURATION, MIN_RELEASE_YEAR};

// Actor Domain
pub use actor::{validate_actor, Actor};

// Genre Domain
pub use genre::{validate_genre, Genre};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
