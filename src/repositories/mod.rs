// src/repositories/mod.rs
//
// Repository layer (the Entity Store)
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO transaction management: callers hand in the transaction's connection
// - NO cross-repository calls
// - Explicit SQL only

pub mod actor_repository;
pub mod genre_repository;
pub mod movie_repository;

pub use actor_repository::{ActorRepository, SqliteActorRepository};
pub use genre_repository::{GenreRepository, SqliteGenreRepository};
pub use movie_repository::{MovieRepository, SqliteMovieRepository};

#[cfg(test)]
pub use actor_repository::MockActorRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
