// src/application/state.rs

use std::sync::Arc;

use crate::services::{ActorService, GenreService, MovieService};

/// Shared router state
/// All fields are Arc-wrapped so cloning per request is cheap.
/// Services are initialized in main.rs and passed here.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub actor_service: Arc<ActorService>,
    pub genre_service: Arc<GenreService>,
}

impl AppState {
    pub fn new(
        movie_service: Arc<MovieService>,
        actor_service: Arc<ActorService>,
        genre_service: Arc<GenreService>,
    ) -> Self {
        Self {
            movie_service,
            actor_service,
            genre_service,
        }
    }
}
