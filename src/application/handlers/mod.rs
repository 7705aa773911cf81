// src/application/handlers/mod.rs
//
// HTTP Handlers
//
// RULES:
// - Accept DTOs
// - Call services on the blocking pool
// - Return DTOs (or Movie entities where the API exposes them)
// - Never contain business logic

pub mod actor_handlers;
pub mod genre_handlers;
pub mod movie_handlers;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::PageRequest;

/// `?force=true` on DELETE
#[derive(Debug, Default, Deserialize)]
pub struct ForceParam {
    #[serde(default)]
    pub force: bool,
}

/// `?page=&size=` on listing endpoints
///
/// Extracted on its own so that an unreadable page or size answers the fixed
/// pagination message while other query keys keep the parser's message.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn extract(params: Result<Query<PageParams>, QueryRejection>) -> AppResult<Self> {
        params
            .map(|Query(p)| p)
            .map_err(|_| AppError::Validation("Invalid pagination parameters".to_string()))
    }

    pub fn into_request(self, default_size: i64) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), self.size.unwrap_or(default_size))
    }
}

/// Run a synchronous service call off the async runtime
pub(crate) async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
