// src/application/error_handling.rs
//
// Error Translation for HTTP
//
// ARCHITECTURE:
// - The only place that turns an AppError into a status code
// - Bodies are a single plain-text message
// - 5xx causes are logged here, once

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, ErrorType};

pub fn status_for(kind: ErrorType) -> StatusCode {
    match kind {
        ErrorType::NotFound => StatusCode::NOT_FOUND,
        ErrorType::Validation | ErrorType::DomainError => StatusCode::BAD_REQUEST,
        ErrorType::Database | ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status code and body text for an error
pub fn render(error: &AppError) -> (StatusCode, String) {
    let kind = error.kind();
    let status = status_for(kind);

    let body = match kind {
        ErrorType::NotFound | ErrorType::Validation => error.to_string(),
        ErrorType::DomainError => format!("Invalid input: {}", error),
        ErrorType::Database | ErrorType::Internal => {
            log::error!("Request failed: {:?}", error);
            format!("An unexpected error occurred: {}", error)
        }
    };

    (status, body)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = render(&self);
        if status.is_client_error() {
            log::warn!("Rejected request ({}): {}", status.as_u16(), body);
        }
        (status, body).into_response()
    }
}

/// Unreadable request bodies are client errors
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}
