use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Earliest accepted release year
pub const MIN_RELEASE_YEAR: i32 = 1880;

/// Latest accepted release year
pub const MAX_RELEASE_YEAR: i32 = 2024;

/// Shortest running time a stored movie may have, in minutes.
/// The create payload is stricter (see the DTO rules).
pub const MIN_ENTITY_DURATION: i32 = 1;

/// Validates all Movie invariants
/// These must hold for every movie row the store persists
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_release_year(movie.release_year)?;
    validate_duration(movie.duration)?;
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Title cannot be blank".to_string(),
        ));
    }
    Ok(())
}

fn validate_release_year(year: i32) -> DomainResult<()> {
    if year < MIN_RELEASE_YEAR {
        return Err(DomainError::InvariantViolation(format!(
            "Release year can not be earlier than {}",
            MIN_RELEASE_YEAR
        )));
    }
    if year > MAX_RELEASE_YEAR {
        return Err(DomainError::InvariantViolation(format!(
            "Release year can not be later than {}",
            MAX_RELEASE_YEAR
        )));
    }
    Ok(())
}

fn validate_duration(duration: i32) -> DomainResult<()> {
    if duration < MIN_ENTITY_DURATION {
        return Err(DomainError::InvariantViolation(
            "Duration must be at least 1 minute".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Title cannot be blank
/// 2. 1880 <= release year <= 2024
/// 3. Duration >= 1 minute
/// 4. Every associated actor/genre is a persisted row
/// 5. Movie owns both associations; deleting it unwinds them first
