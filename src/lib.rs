// src/lib.rs
// KMDB - Movie, actor and genre catalog backend
//
// Architecture:
// - Domain-centric: entity rules live in the domain modules
// - Movie owns both associations; actors and genres see movies through the store
// - Explicit: every service operation is exactly one transaction
// - Application Layer: HTTP boundary over the services

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod services;
pub mod util;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod dto;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_actor,
    validate_genre,
    validate_movie,
    // Actor
    Actor,
    DomainError,
    // Genre
    Genre,
    // Movie
    Movie,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorType};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ActorRepository,
    GenreRepository,
    MovieRepository,
    SqliteActorRepository,
    SqliteGenreRepository,
    SqliteMovieRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ActorService, GenreService, MovieService, PageRequest};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{build_router, AppState};
pub use config::AppConfig;
pub use dto::{ActorDto, GenreDto, MovieDto, Page};
