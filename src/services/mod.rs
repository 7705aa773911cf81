// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Each public operation is one transaction. Services own validation that
// needs the store (duplicates, association checks) and the entity rules.

pub mod actor_service;
pub mod genre_service;
pub mod movie_service;
pub mod pagination;

pub use actor_service::ActorService;
pub use genre_service::GenreService;
pub use movie_service::MovieService;
pub use pagination::{PageRequest, MAX_PAGE_SIZE};
