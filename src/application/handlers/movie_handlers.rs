// src/application/handlers/movie_handlers.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::{run_blocking, ForceParam, PageParams};
use crate::application::state::AppState;
use crate::domain::Movie;
use crate::dto::{ActorDto, MovieDto};
use crate::error::AppResult;

pub const DEFAULT_MOVIE_PAGE_SIZE: i64 = 100;

/// Filters take precedence over paging: genre, then year, then actor
#[derive(Debug, Default, Deserialize)]
pub struct MovieFilterParams {
    pub genre: Option<i64>,
    pub year: Option<i32>,
    pub actor: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TitleParam {
    pub title: String,
}

pub async fn list_movies(
    State(state): State<AppState>,
    filters: Result<Query<MovieFilterParams>, QueryRejection>,
    paging: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = filters?;
    let paging = PageParams::extract(paging)?;
    let service = state.movie_service.clone();

    if let Some(genre_id) = params.genre {
        let movies = run_blocking(move || service.get_movies_by_genre(genre_id)).await?;
        return Ok(Json(movies).into_response());
    }
    if let Some(year) = params.year {
        let movies = run_blocking(move || service.get_movies_by_release_year(year)).await?;
        return Ok(Json(movies).into_response());
    }
    if let Some(actor_id) = params.actor {
        let movies = run_blocking(move || service.get_movies_by_actor(actor_id)).await?;
        return Ok(Json(movies).into_response());
    }

    let request = paging.into_request(DEFAULT_MOVIE_PAGE_SIZE);
    let page = run_blocking(move || service.list_movies(request)).await?;
    Ok(Json(page).into_response())
}

pub async fn search_movies(
    State(state): State<AppState>,
    params: Result<Query<TitleParam>, QueryRejection>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let Query(TitleParam { title }) = params?;
    let service = state.movie_service.clone();

    let movies = run_blocking(move || service.search_movies_by_title(&title)).await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let service = state.movie_service.clone();
    Ok(Json(run_blocking(move || service.get_movie(id)).await?))
}

pub async fn get_movie_actors(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ActorDto>>> {
    let service = state.movie_service.clone();
    Ok(Json(run_blocking(move || service.get_actors_by_movie(id)).await?))
}

pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MovieDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let Json(dto) = payload?;
    dto.validate()?;

    let service = state.movie_service.clone();
    let movie = run_blocking(move || service.create_movie(dto)).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<MovieDto>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(dto) = payload?;

    let service = state.movie_service.clone();
    Ok(Json(run_blocking(move || service.update_movie(id, dto)).await?))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    params: Result<Query<ForceParam>, QueryRejection>,
) -> AppResult<StatusCode> {
    let Query(ForceParam { force }) = params?;

    let service = state.movie_service.clone();
    run_blocking(move || service.delete_movie(id, force)).await?;
    Ok(StatusCode::NO_CONTENT)
}
