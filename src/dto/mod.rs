// src/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are the wire shape of the catalog (camelCase JSON)
// - Every field of an inbound DTO is optional; absence has meaning on PATCH
// - Field-level validation lives here and reports every violation at once
// - Entity rules (validate_movie, ...) still run in the services

pub mod actor_dto;
pub mod genre_dto;
pub mod movie_dto;
pub mod page;

pub use actor_dto::ActorDto;
pub use genre_dto::GenreDto;
pub use movie_dto::{MovieDto, MIN_DTO_DURATION};
pub use page::Page;
