// src/application/handlers/actor_handlers.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::{run_blocking, ForceParam, PageParams};
use crate::application::state::AppState;
use crate::dto::ActorDto;
use crate::error::AppResult;

pub const DEFAULT_ACTOR_PAGE_SIZE: i64 = 100;

/// `name` switches the listing to a name search
#[derive(Debug, Default, Deserialize)]
pub struct ActorSearchParams {
    pub name: Option<String>,
}

pub async fn list_actors(
    State(state): State<AppState>,
    search: Result<Query<ActorSearchParams>, QueryRejection>,
    paging: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = search?;
    let paging = PageParams::extract(paging)?;
    let service = state.actor_service.clone();

    if let Some(name) = params.name {
        let actors = run_blocking(move || service.search_actors_by_name(&name)).await?;
        return Ok(Json(actors).into_response());
    }

    let request = paging.into_request(DEFAULT_ACTOR_PAGE_SIZE);
    let page = run_blocking(move || service.list_actors(request)).await?;
    Ok(Json(page).into_response())
}

pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ActorDto>> {
    let service = state.actor_service.clone();
    Ok(Json(run_blocking(move || service.get_actor(id)).await?))
}

pub async fn create_actor(
    State(state): State<AppState>,
    payload: Result<Json<ActorDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ActorDto>)> {
    let Json(dto) = payload?;
    dto.validate()?;

    let service = state.actor_service.clone();
    let actor = run_blocking(move || service.create_actor(dto)).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ActorDto>, JsonRejection>,
) -> AppResult<Json<ActorDto>> {
    let Json(dto) = payload?;

    let service = state.actor_service.clone();
    Ok(Json(run_blocking(move || service.update_actor(id, dto)).await?))
}

pub async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    params: Result<Query<ForceParam>, QueryRejection>,
) -> AppResult<StatusCode> {
    let Query(ForceParam { force }) = params?;

    let service = state.actor_service.clone();
    run_blocking(move || service.delete_actor(id, force)).await?;
    Ok(StatusCode::NO_CONTENT)
}
