// src/services/actor_service.rs
use crate::db::{read_only, read_write, ConnectionPool};
use crate::domain::actor::{validate_actor, Actor};
use crate::dto::{ActorDto, Page};
use crate::error::{AppError, AppResult};
use crate::repositories::{ActorRepository, MovieRepository};
use crate::services::pagination::PageRequest;
use std::sync::Arc;

pub struct ActorService {
    pool: Arc<ConnectionPool>,
    actor_repo: Arc<dyn ActorRepository>,
    movie_repo: Arc<dyn MovieRepository>,
}

impl ActorService {
    pub fn new(
        pool: Arc<ConnectionPool>,
        actor_repo: Arc<dyn ActorRepository>,
        movie_repo: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            pool,
            actor_repo,
            movie_repo,
        }
    }

    pub fn list_actors(&self, request: PageRequest) -> AppResult<Page<ActorDto>> {
        request.validate()?;

        read_only(&self.pool, |conn| {
            let content = self
                .actor_repo
                .find_page(conn, request.offset(), request.size)?;
            let total = self.actor_repo.count(conn)?;

            Ok(Page::new(content, request.page, request.size, total).map(ActorDto::from))
        })
    }

    pub fn get_actor(&self, id: i64) -> AppResult<ActorDto> {
        read_only(&self.pool, |conn| {
            self.actor_repo
                .find_by_id(conn, id)?
                .map(ActorDto::from)
                .ok_or_else(|| AppError::not_found_with_id("Actor", id))
        })
    }

    pub fn search_actors_by_name(&self, name: &str) -> AppResult<Vec<ActorDto>> {
        log::debug!("Searching for actors with name containing: {}", name);

        let actors = read_only(&self.pool, |conn| self.actor_repo.search_by_name(conn, name))?;
        log::debug!("Found {} actor(s)", actors.len());

        Ok(actors.into_iter().map(ActorDto::from).collect())
    }

    /// Rejects a second actor with the same name and birth date
    pub fn create_actor(&self, dto: ActorDto) -> AppResult<ActorDto> {
        let name = match dto.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => {
                return Err(AppError::invalid_input(
                    "The actor's name cannot be null or blank.",
                ))
            }
        };
        let birth_date = dto
            .parsed_birth_date()?
            .ok_or_else(|| AppError::invalid_input("The actor's birth date cannot be null."))?;

        let actor = Actor::new(name, birth_date);
        validate_actor(&actor)?;

        let saved = read_write(&self.pool, |conn| {
            if self
                .actor_repo
                .find_by_name_and_birth_date(conn, &actor.name, &actor.birth_date)?
                .is_some()
            {
                return Err(AppError::DuplicateResource(
                    "An actor with the same name and birthdate already exists".to_string(),
                ));
            }
            self.actor_repo.insert(conn, &actor)
        })?;
        log::info!("Created actor {} ({})", saved.id, saved);

        Ok(ActorDto::from(saved))
    }

    /// Partial update: a blank name and an absent date leave the stored values alone
    pub fn update_actor(&self, id: i64, dto: ActorDto) -> AppResult<ActorDto> {
        let birth_date = dto.parsed_birth_date()?;

        read_write(&self.pool, |conn| {
            let mut actor = self
                .actor_repo
                .find_by_id(conn, id)?
                .ok_or_else(|| AppError::not_found_with_id("Actor", id))?;

            if let Some(name) = dto.name.as_deref().filter(|n| !n.trim().is_empty()) {
                actor.rename(name.to_string());
            }
            if let Some(date) = birth_date {
                actor.set_birth_date(date);
            }

            validate_actor(&actor)?;
            self.actor_repo.update(conn, &actor)?;

            Ok(ActorDto::from(actor))
        })
    }

    /// Without `force`, an actor still cast in movies is kept. With it, the
    /// actor is removed from every movie first; all in one transaction.
    pub fn delete_actor(&self, id: i64, force: bool) -> AppResult<()> {
        read_write(&self.pool, |conn| {
            if self.actor_repo.find_by_id(conn, id)?.is_none() {
                return Err(AppError::not_found_with_id("Actor", id));
            }
            let movie_ids = self.actor_repo.movie_ids(conn, id)?;

            if !movie_ids.is_empty() {
                if !force {
                    return Err(AppError::DuplicateResource(
                        "Actor is associated with movies and cannot be deleted.".to_string(),
                    ));
                }

                for movie_id in &movie_ids {
                    if let Some(mut movie) = self.movie_repo.find_by_id(conn, *movie_id)? {
                        movie.remove_actor(id);
                        self.movie_repo.update(conn, &movie)?;
                    }
                }
                log::warn!(
                    "Force-deleting actor {} removed them from {} movie(s)",
                    id,
                    movie_ids.len()
                );
            }

            self.actor_repo.delete(conn, id)
        })
    }
}
