// src/services/movie_service.rs
//
// Movie is the owning side of both associations: every change to a movie's
// cast or genres goes through MovieRepository::update, whichever service
// initiates it.

use crate::db::{read_only, read_write, ConnectionPool};
use crate::domain::movie::{validate_movie, Movie};
use crate::dto::{ActorDto, MovieDto, Page};
use crate::error::{AppError, AppResult};
use crate::repositories::{ActorRepository, GenreRepository, MovieRepository};
use crate::services::pagination::PageRequest;
use rusqlite::Connection;
use std::sync::Arc;

pub struct MovieService {
    pool: Arc<ConnectionPool>,
    movie_repo: Arc<dyn MovieRepository>,
    actor_repo: Arc<dyn ActorRepository>,
    genre_repo: Arc<dyn GenreRepository>,
}

impl MovieService {
    pub fn new(
        pool: Arc<ConnectionPool>,
        movie_repo: Arc<dyn MovieRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        genre_repo: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            pool,
            movie_repo,
            actor_repo,
            genre_repo,
        }
    }

    /// Create a movie with its cast and genres
    ///
    /// Unknown actor/genre ids are dropped. A movie whose title contains the
    /// new title (ignoring case) with the same year and duration counts as a
    /// duplicate.
    pub fn create_movie(&self, dto: MovieDto) -> AppResult<Movie> {
        let mut movie = dto.to_entity()?;
        movie.id = 0;

        let saved = read_write(&self.pool, |conn| {
            let actor_ids = dto.actor_ids.as_deref().unwrap_or_default();
            let genre_ids = dto.genre_ids.as_deref().unwrap_or_default();
            movie.set_actors(self.actor_repo.find_all_by_ids(conn, actor_ids)?);
            movie.set_genres(self.genre_repo.find_all_by_ids(conn, genre_ids)?);

            let duplicate = self
                .movie_repo
                .search_by_title(conn, &movie.title)?
                .iter()
                .any(|m| m.release_year == movie.release_year && m.duration == movie.duration);
            if duplicate {
                return Err(AppError::DuplicateResource(
                    "Movie already exists with the same details.".to_string(),
                ));
            }

            validate_movie(&movie)?;
            self.movie_repo.insert(conn, &movie)
        })?;

        log::info!(
            "Created movie {} ({}) with {} actor(s) and {} genre(s)",
            saved.id,
            saved,
            saved.actors.len(),
            saved.genres.len()
        );
        Ok(saved)
    }

    pub fn get_movie(&self, id: i64) -> AppResult<Movie> {
        read_only(&self.pool, |conn| self.load(conn, id))
    }

    pub fn list_movies(&self, request: PageRequest) -> AppResult<Page<MovieDto>> {
        request.validate()?;

        read_only(&self.pool, |conn| {
            let content = self
                .movie_repo
                .find_page(conn, request.offset(), request.size)?;
            let total = self.movie_repo.count(conn)?;

            Ok(Page::new(content, request.page, request.size, total).map(MovieDto::from))
        })
    }

    pub fn get_movies_by_genre(&self, genre_id: i64) -> AppResult<Vec<MovieDto>> {
        read_only(&self.pool, |conn| {
            if self.genre_repo.find_by_id(conn, genre_id)?.is_none() {
                return Err(AppError::not_found("Genre"));
            }
            Ok(Self::to_dtos(self.movie_repo.find_by_genre(conn, genre_id)?))
        })
    }

    pub fn get_movies_by_release_year(&self, year: i32) -> AppResult<Vec<MovieDto>> {
        read_only(&self.pool, |conn| {
            Ok(Self::to_dtos(self.movie_repo.find_by_release_year(conn, year)?))
        })
    }

    pub fn get_movies_by_actor(&self, actor_id: i64) -> AppResult<Vec<MovieDto>> {
        read_only(&self.pool, |conn| {
            if self.actor_repo.find_by_id(conn, actor_id)?.is_none() {
                return Err(AppError::not_found_with_id("Actor", actor_id));
            }
            Ok(Self::to_dtos(self.movie_repo.find_by_actor(conn, actor_id)?))
        })
    }

    pub fn search_movies_by_title(&self, title: &str) -> AppResult<Vec<MovieDto>> {
        read_only(&self.pool, |conn| {
            Ok(Self::to_dtos(self.movie_repo.search_by_title(conn, title)?))
        })
    }

    pub fn get_actors_by_movie(&self, movie_id: i64) -> AppResult<Vec<ActorDto>> {
        let movie = self.get_movie(movie_id)?;
        Ok(movie.actors.into_iter().map(ActorDto::from).collect())
    }

    /// Partial update
    ///
    /// Absent scalars keep their value. For each id list: absent leaves the
    /// association untouched, empty clears it, otherwise it is replaced by the
    /// ids that resolve.
    pub fn update_movie(&self, id: i64, dto: MovieDto) -> AppResult<Movie> {
        log::debug!("Updating movie {} with {:?}", id, dto);

        read_write(&self.pool, |conn| {
            let mut movie = self.load(conn, id)?;

            movie.apply_update(dto.title.clone(), dto.release_year, dto.duration);

            if let Some(ids) = dto.actor_ids.as_deref() {
                movie.set_actors(self.actor_repo.find_all_by_ids(conn, ids)?);
            }
            if let Some(ids) = dto.genre_ids.as_deref() {
                movie.set_genres(self.genre_repo.find_all_by_ids(conn, ids)?);
            }

            validate_movie(&movie)?;
            self.movie_repo.update(conn, &movie)?;

            log::debug!("Updated movie {}", movie);
            Ok(movie)
        })
    }

    /// Without `force`, a movie with any actor or genre is kept. With it, its
    /// join rows are cleared before the row is deleted; all in one transaction.
    pub fn delete_movie(&self, id: i64, force: bool) -> AppResult<()> {
        read_write(&self.pool, |conn| {
            let mut movie = self.load(conn, id)?;

            if movie.has_associations() {
                if !force {
                    return Err(AppError::DuplicateResource(format!(
                        "Oops, you cannot delete '{}' because it is associated with {} actor(s) and {} genre(s).",
                        movie.title,
                        movie.actors.len(),
                        movie.genres.len()
                    )));
                }

                log::warn!(
                    "Force-deleting movie {} with {} actor(s) and {} genre(s)",
                    id,
                    movie.actors.len(),
                    movie.genres.len()
                );
                movie.set_actors(Vec::new());
                movie.set_genres(Vec::new());
                self.movie_repo.update(conn, &movie)?;
            }

            self.movie_repo.delete(conn, id)
        })
    }

    fn load(&self, conn: &Connection, id: i64) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(conn, id)?
            .ok_or_else(|| AppError::not_found("Movie"))
    }

    fn to_dtos(movies: Vec<Movie>) -> Vec<MovieDto> {
        movies.into_iter().map(MovieDto::from).collect()
    }
}
