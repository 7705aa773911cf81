// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An id did not resolve to a stored row.
    #[error("{0}")]
    NotFound(String),

    /// Creation would duplicate an existing row, or a delete is blocked by live
    /// associations.
    #[error("{0}")]
    DuplicateResource(String),

    /// Blank or missing required fields, out-of-range values, bad pagination.
    #[error("{0}")]
    Validation(String),

    /// A date string that does not parse as a calendar date.
    #[error("{0}")]
    MalformedDate(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("{} not found", resource))
    }

    pub fn not_found_with_id(resource: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} not found with id: {}", resource, id))
    }

    /// Rejection raised by a service rule (blank name, bad page size, ...).
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::Validation(format!("Invalid input: {}", message.into()))
    }

    /// Rejection carrying every field-level violation found on a DTO.
    pub fn field_violations(violations: &[String]) -> Self {
        let mut message = String::from("Validation failed: ");
        for violation in violations {
            message.push_str(violation);
            message.push_str("; ");
        }
        AppError::Validation(message)
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Other(format!("Date parse error: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Other(format!("Blocking task failed: {}", err))
    }
}

/// Error categories, one per transport outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Rejected input, duplicate or blocked delete (400)
    Validation,

    /// Entity invariant violation (400)
    DomainError,

    /// Database/persistence error (500)
    Database,

    /// Other/unknown error (500)
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorType {
        match self {
            AppError::NotFound(_) => ErrorType::NotFound,
            AppError::DuplicateResource(_)
            | AppError::Validation(_)
            | AppError::MalformedDate(_) => ErrorType::Validation,
            AppError::Domain(_) => ErrorType::DomainError,
            AppError::Database(_) | AppError::Pool(_) => ErrorType::Database,
            AppError::Serialization(_) | AppError::Io(_) | AppError::Other(_) => {
                ErrorType::Internal
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_violations_concatenates_messages() {
        let err = AppError::field_violations(&[
            "Title can not be blank".to_string(),
            "Duration can not be null".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Title can not be blank; Duration can not be null; "
        );
    }

    #[test]
    fn test_invalid_input_prefix() {
        let err = AppError::invalid_input("page number can't be < 0");
        assert_eq!(err.to_string(), "Invalid input: page number can't be < 0");
    }

    #[test]
    fn test_kind() {
        assert_eq!(AppError::not_found("Movie").kind(), ErrorType::NotFound);
        assert_eq!(
            AppError::DuplicateResource("dup".to_string()).kind(),
            ErrorType::Validation
        );
        assert_eq!(
            AppError::MalformedDate("bad".to_string()).kind(),
            ErrorType::Validation
        );
        assert_eq!(
            AppError::Domain(DomainError::InvariantViolation("x".to_string())).kind(),
            ErrorType::DomainError
        );
        assert_eq!(AppError::Pool("gone".to_string()).kind(), ErrorType::Database);
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(AppError::not_found("Movie").to_string(), "Movie not found");
        assert_eq!(
            AppError::not_found_with_id("Actor", 7).to_string(),
            "Actor not found with id: 7"
        );
    }
}
