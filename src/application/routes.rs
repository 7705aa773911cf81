// src/application/routes.rs

use axum::routing::get;
use axum::Router;

use crate::application::handlers::{actor_handlers, genre_handlers, movie_handlers};
use crate::application::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/movies",
            get(movie_handlers::list_movies).post(movie_handlers::create_movie),
        )
        .route("/api/movies/search", get(movie_handlers::search_movies))
        .route(
            "/api/movies/:id",
            get(movie_handlers::get_movie)
                .patch(movie_handlers::update_movie)
                .delete(movie_handlers::delete_movie),
        )
        .route("/api/movies/:id/actors", get(movie_handlers::get_movie_actors))
        .route(
            "/api/actors",
            get(actor_handlers::list_actors).post(actor_handlers::create_actor),
        )
        .route(
            "/api/actors/:id",
            get(actor_handlers::get_actor)
                .patch(actor_handlers::update_actor)
                .delete(actor_handlers::delete_actor),
        )
        .route(
            "/api/genres",
            get(genre_handlers::list_genres).post(genre_handlers::create_genre),
        )
        .route(
            "/api/genres/:id",
            get(genre_handlers::get_genre)
                .patch(genre_handlers::update_genre)
                .delete(genre_handlers::delete_genre),
        )
        .with_state(state)
}
