// src/application/handlers/genre_handlers.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::{run_blocking, ForceParam, PageParams};
use crate::application::state::AppState;
use crate::dto::{GenreDto, Page};
use crate::error::AppResult;

pub const DEFAULT_GENRE_PAGE_SIZE: i64 = 10;

pub async fn list_genres(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Page<GenreDto>>> {
    let request = PageParams::extract(params)?.into_request(DEFAULT_GENRE_PAGE_SIZE);

    let service = state.genre_service.clone();
    Ok(Json(run_blocking(move || service.list_genres(request)).await?))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GenreDto>> {
    let service = state.genre_service.clone();
    Ok(Json(run_blocking(move || service.get_genre(id)).await?))
}

pub async fn create_genre(
    State(state): State<AppState>,
    payload: Result<Json<GenreDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<GenreDto>)> {
    let Json(dto) = payload?;
    dto.validate()?;

    let service = state.genre_service.clone();
    let genre = run_blocking(move || service.create_genre(dto)).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<GenreDto>, JsonRejection>,
) -> AppResult<Json<GenreDto>> {
    let Json(dto) = payload?;
    dto.validate()?;

    let service = state.genre_service.clone();
    Ok(Json(run_blocking(move || service.update_genre(id, dto)).await?))
}

pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    params: Result<Query<ForceParam>, QueryRejection>,
) -> AppResult<StatusCode> {
    let Query(ForceParam { force }) = params?;

    let service = state.genre_service.clone();
    run_blocking(move || service.delete_genre(id, force)).await?;
    Ok(StatusCode::NO_CONTENT)
}
